use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 129, g: 199, b: 132 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 213, b: 79 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 224, g: 224, b: 224 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 100, g: 181, b: 246 };
pub const VENDOR: Color = Color::TrueColor { r: 186, g: 104, b: 200 };
pub const MUTED: Color = Color::TrueColor { r: 158, g: 158, b: 158 };
pub const ERROR: Color = Color::TrueColor { r: 239, g: 83, b: 80 };
