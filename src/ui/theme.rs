use ratatui::style::Color;

pub const SCREEN_BG: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const SCREEN_TEXT: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const HEADER_TEXT: Color = Color::Rgb(0xf8, 0xfa, 0xfc);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SECTION_TITLE: Color = Color::Rgb(0x93, 0xc5, 0xfd);
pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const CHIP_BG: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const CHIP_ACTIVE_BG: Color = Color::Rgb(0x1d, 0x4e, 0xd8);
pub const STATUS_BUSY: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

pub const CARD_BG: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const CARD_TEXT: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const GHOST_BG: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const PRIMARY_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BACKDROP: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const BACKDROP_ALPHA: f32 = 0.58;

/// Mix `overlay` over `base` with weight `alpha`. Non-RGB colors switch at 50%.
pub fn blend(base: Color, overlay: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (base, overlay) {
        (Color::Rgb(br, bg, bb), Color::Rgb(or, og, ob)) => {
            let mix = |b: u8, o: u8| {
                (f32::from(b) + (f32::from(o) - f32::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(br, or), mix(bg, og), mix(bb, ob))
        }
        _ if alpha >= 0.5 => overlay,
        _ => base,
    }
}
