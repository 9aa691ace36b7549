use crate::deck::content::Accent;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub surface: Color, // Card background
    pub fg: Color,
    pub heading: Color,
    pub muted: Color,
    pub faint: Color,
    pub primary: Color, // Teal, the QUINN brand colour
    pub danger: Color,  // Red
    pub warning: Color, // Amber
    pub success: Color, // Emerald
    pub info: Color,    // Blue
    pub violet: Color,
    pub cyan: Color,
    pub border_active: Color,
    pub border_normal: Color,
    pub outlook: Color, // Outlook title bar blue
    pub paper: Color,   // Email body background
    pub ink: Color,     // Email body text
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(11, 15, 25),
    surface: Color::Rgb(17, 24, 39),
    fg: Color::Rgb(209, 213, 219),
    heading: Color::Rgb(255, 255, 255),
    muted: Color::Rgb(107, 114, 128),
    faint: Color::Rgb(55, 65, 81),
    primary: Color::Rgb(45, 212, 191),
    danger: Color::Rgb(248, 113, 113),
    warning: Color::Rgb(251, 191, 36),
    success: Color::Rgb(52, 211, 153),
    info: Color::Rgb(96, 165, 250),
    violet: Color::Rgb(167, 139, 250),
    cyan: Color::Rgb(34, 211, 238),
    border_active: Color::Rgb(20, 184, 166),
    border_normal: Color::Rgb(55, 65, 81),
    outlook: Color::Rgb(0, 120, 212),
    paper: Color::Rgb(248, 250, 252),
    ink: Color::Rgb(55, 65, 81),
};

impl Theme {
    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Emerald => self.success,
            Accent::Blue => self.info,
            Accent::Violet => self.violet,
            Accent::Cyan => self.cyan,
            Accent::Amber => self.warning,
        }
    }
}
