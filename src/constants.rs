// Source font
pub const INPUT_PATH: &str = "NotoSansSymbols2-Regular.ttf";

// Include guard tag, also the output file stem (NOTO_SYMBOLS.h)
pub const GUARD_TAG: &str = "NOTO_SYMBOLS";
pub const HEADER_EXTENSION: &str = "h";

// Array identifier. Set to None to derive it from the input file name.
pub const ARRAY_NAME: Option<&str> = Some("font_data_symbol");
pub const IDENTIFIER_PREFIX: &str = "font_data_";

// Layout of the byte lines
pub const BYTES_PER_LINE: usize = 16;
pub const INDENT: &str = "    ";
