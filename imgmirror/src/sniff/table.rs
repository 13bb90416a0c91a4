//! MIME subtype → file extension table.
//!
//! Lookup is an exact match on the subtype (the part of the MIME type after
//! `image/`). The table covers the common raster formats plus the long tail
//! of vector, editor and raw camera formats encountered when mirroring mixed
//! media libraries. Subtypes with several spellings in the wild (vendor
//! prefixes, `x-` prefixes) appear once per spelling.

/// Known MIME subtypes and the canonical extension for each.
const EXTENSIONS: &[(&str, &str)] = &[
    // Common raster formats
    ("png", "png"),
    ("apng", "apng"),
    ("jpeg", "jpg"),
    ("jpg", "jpg"),
    ("pjpeg", "jpg"),
    ("jfif", "jpg"),
    ("gif", "gif"),
    ("webp", "webp"),
    ("bmp", "bmp"),
    ("x-bmp", "bmp"),
    ("x-ms-bmp", "bmp"),
    ("x-windows-bmp", "bmp"),
    ("dib", "dib"),
    ("tiff", "tiff"),
    ("x-tiff", "tiff"),
    ("tif", "tif"),
    ("avif", "avif"),
    ("heic", "heic"),
    ("heif", "heif"),
    ("jxl", "jxl"),
    ("jp2", "jp2"),
    ("x-jp2", "jp2"),
    ("jpx", "jpx"),
    ("jpm", "jpm"),
    ("jxr", "jxr"),
    ("vnd.ms-photo", "jxr"),
    ("hdp", "hdp"),
    ("wdp", "wdp"),
    // Icons and cursors
    ("x-icon", "ico"),
    ("vnd.microsoft.icon", "ico"),
    ("ico", "ico"),
    ("icns", "icns"),
    ("x-icns", "icns"),
    ("cur", "cur"),
    ("x-cursor", "cur"),
    // Netpbm family
    ("x-portable-anymap", "pnm"),
    ("x-portable-bitmap", "pbm"),
    ("x-portable-graymap", "pgm"),
    ("x-portable-pixmap", "ppm"),
    ("pnm", "pnm"),
    ("pbm", "pbm"),
    ("pgm", "pgm"),
    ("ppm", "ppm"),
    ("pam", "pam"),
    ("x-pam", "pam"),
    // Targa, SGI, Sun raster
    ("x-targa", "tga"),
    ("x-tga", "tga"),
    ("tga", "tga"),
    ("x-sgi", "sgi"),
    ("sgi", "sgi"),
    ("x-rgb", "rgb"),
    ("rgb", "rgb"),
    ("rgba", "rgba"),
    ("bw", "bw"),
    ("int", "int"),
    ("inta", "inta"),
    ("x-sun-raster", "ras"),
    ("x-cmu-raster", "ras"),
    ("ras", "ras"),
    ("sun", "sun"),
    // High dynamic range and modern lossless
    ("vnd.radiance", "hdr"),
    ("x-hdr", "hdr"),
    ("x-exr", "exr"),
    ("aces", "exr"),
    ("qoi", "qoi"),
    ("x-qoi", "qoi"),
    ("farbfeld", "ff"),
    ("x-ff", "ff"),
    // Texture containers
    ("vnd-ms.dds", "dds"),
    ("vnd.ms-dds", "dds"),
    ("dds", "dds"),
    ("x-dds", "dds"),
    ("vtf", "vtf"),
    ("blp", "blp"),
    ("x-blp", "blp"),
    // Legacy paint formats
    ("vnd.zbrush.pcx", "pcx"),
    ("x-pcx", "pcx"),
    ("pcx", "pcx"),
    ("x-pict", "pict"),
    ("pict", "pict"),
    ("pct", "pct"),
    ("x-msp", "msp"),
    ("msp", "msp"),
    ("x-xbitmap", "xbm"),
    ("xbm", "xbm"),
    ("x-xpixmap", "xpm"),
    ("xpm", "xpm"),
    ("x-xwindowdump", "xwd"),
    ("cut", "cut"),
    ("x-cut", "cut"),
    ("pc1", "pc1"),
    ("pc2", "pc2"),
    ("pc3", "pc3"),
    ("pi1", "pi1"),
    ("pi2", "pi2"),
    ("pi3", "pi3"),
    ("rle", "rle"),
    ("x-rle", "rle"),
    ("wbmp", "wbmp"),
    ("vnd.wap.wbmp", "wbmp"),
    // Editor and project formats
    ("vnd.adobe.photoshop", "psd"),
    ("x-photoshop", "psd"),
    ("x-psd", "psd"),
    ("psd", "psd"),
    ("psb", "psb"),
    ("pdd", "pdd"),
    ("x-psp", "psp"),
    ("psp", "psp"),
    ("x-xcf", "xcf"),
    ("xcf", "xcf"),
    ("x-gimp-gbr", "gbr"),
    ("x-gimp-gpl", "gpl"),
    ("cpt", "cpt"),
    ("x-cpt", "cpt"),
    ("pdn", "pdn"),
    ("x-pdn", "pdn"),
    ("cd5", "cd5"),
    ("cit", "cit"),
    ("art", "art"),
    ("x-jg", "art"),
    ("ase", "ase"),
    // Raw camera formats
    ("x-canon-cr2", "cr2"),
    ("x-canon-crw", "crw"),
    ("x-nikon-nef", "nef"),
    ("x-nikon-nrw", "nrw"),
    ("x-sony-arw", "arw"),
    ("x-sony-sr2", "sr2"),
    ("x-sony-srf", "srf"),
    ("x-adobe-dng", "dng"),
    ("x-fuji-raf", "raf"),
    ("x-olympus-orf", "orf"),
    ("x-panasonic-rw2", "rw2"),
    ("x-panasonic-raw", "raw"),
    ("x-pentax-pef", "pef"),
    ("x-sigma-x3f", "x3f"),
    ("x-kodak-dcr", "dcr"),
    ("x-kodak-k25", "k25"),
    ("x-kodak-kdc", "kdc"),
    ("x-minolta-mrw", "mrw"),
    ("x-hasselblad-3fr", "3fr"),
    ("x-epson-erf", "erf"),
    ("x-raw", "raw"),
    ("raw", "raw"),
    // Vector and CAD formats
    ("svg+xml", "svg"),
    ("svg", "svg"),
    ("x-eps", "eps"),
    ("eps", "eps"),
    ("x-cgm", "cgm"),
    ("cgm", "cgm"),
    ("x-coreldraw", "cdr"),
    ("cdr", "cdr"),
    ("x-cmx", "cmx"),
    ("cmx", "cmx"),
    ("vnd.dxf", "dxf"),
    ("dxf", "dxf"),
    ("x-wmf", "wmf"),
    ("wmf", "wmf"),
    ("x-emf", "emf"),
    ("emf", "emf"),
    ("x-xar", "xar"),
    ("xar", "xar"),
    ("odg", "odg"),
    ("x-illustrator", "ai"),
    ("ai", "ai"),
    ("awg", "awg"),
    ("e2d", "e2d"),
    ("egt", "egt"),
    ("fs", "fs"),
    ("v2d", "v2d"),
    ("vnd", "vnd"),
    ("amf", "amf"),
    ("x-amf", "amf"),
    ("3dv", "3dv"),
    ("stl", "stl"),
    ("vrml", "vrml"),
    ("x3d", "x3d"),
    ("sxd", "sxd"),
    // Document and composite image formats
    ("vnd.djvu", "djvu"),
    ("x-djvu", "djvu"),
    ("djvu", "djvu"),
    ("x-jng", "jng"),
    ("jng", "jng"),
    ("x-mng", "mng"),
    ("mng", "mng"),
    ("x-miff", "miff"),
    ("miff", "miff"),
    ("x-ilbm", "lbm"),
    ("iff", "iff"),
    ("lbm", "lbm"),
    ("liff", "liff"),
    // Scientific and geospatial formats
    ("x-nrrd", "nrrd"),
    ("nrrd", "nrrd"),
    ("x-exif", "exif"),
    ("exif", "exif"),
    ("x-ota", "ota"),
    ("ota", "ota"),
    ("x-nitf", "nitf"),
    ("nitf", "nitf"),
    ("x-pcf", "pcf"),
    ("pcf", "pcf"),
    ("x-qfx", "qfx"),
    ("qfx", "qfx"),
    ("x-sct", "sct"),
    ("sct", "sct"),
    ("x-sid", "sid"),
    ("sid", "sid"),
    ("x-ecw", "ecw"),
    ("ecw", "ecw"),
    ("x-pgf", "pgf"),
    ("pgf", "pgf"),
    ("grf", "grf"),
    ("x-grf", "grf"),
    ("max", "max"),
    ("x-max", "max"),
    ("pxr", "pxr"),
    ("x-pxr", "pxr"),
    ("pxm", "pxm"),
    ("px", "px"),
    ("jps", "jps"),
    ("pns", "pns"),
];

/// Look up the extension for a MIME subtype, exact match only.
pub(crate) fn extension_for_subtype(subtype: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(known, _)| *known == subtype)
        .map(|(_, ext)| *ext)
}
