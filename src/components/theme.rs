/// Tailwind classes for the light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border_color: &'static str,
}

impl Palette {
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                bg_primary: "bg-gray-900",
                bg_secondary: "bg-gray-800",
                bg_tertiary: "bg-gray-700",
                text_primary: "text-white",
                text_secondary: "text-gray-300",
                border_color: "border-gray-700",
            }
        } else {
            Self {
                bg_primary: "bg-white",
                bg_secondary: "bg-gray-50",
                bg_tertiary: "bg-white",
                text_primary: "text-gray-900",
                text_secondary: "text-gray-600",
                border_color: "border-gray-200",
            }
        }
    }
}
