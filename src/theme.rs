use eframe::egui;

#[derive(Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: egui::Color32,
    pub panel_background: egui::Color32,
    pub text_color: egui::Color32,
    pub accent_color: egui::Color32,
    pub board_light: egui::Color32,
    pub board_dark: egui::Color32,
    pub queen_color: egui::Color32,
    pub threat_color: egui::Color32,
}

impl Theme {
    pub fn presets() -> Vec<Self> {
        vec![
            Self {
                name: "Slate",
                background: egui::Color32::from_rgb(18, 22, 30),
                panel_background: egui::Color32::from_rgb(32, 38, 50),
                text_color: egui::Color32::from_rgb(220, 226, 236),
                accent_color: egui::Color32::from_rgb(86, 156, 214),
                board_light: egui::Color32::from_rgb(222, 228, 236),
                board_dark: egui::Color32::from_rgb(112, 128, 150),
                queen_color: egui::Color32::from_rgb(24, 28, 40),
                threat_color: egui::Color32::from_rgba_unmultiplied(230, 60, 60, 48),
            },
            Self {
                name: "Tournament",
                background: egui::Color32::from_rgb(38, 46, 32),
                panel_background: egui::Color32::from_rgb(56, 66, 48),
                text_color: egui::Color32::from_rgb(238, 236, 214),
                accent_color: egui::Color32::from_rgb(214, 170, 60),
                board_light: egui::Color32::from_rgb(238, 238, 210),
                board_dark: egui::Color32::from_rgb(118, 150, 86),
                queen_color: egui::Color32::from_rgb(30, 30, 30),
                threat_color: egui::Color32::from_rgba_unmultiplied(200, 40, 40, 56),
            },
            Self {
                name: "Ink",
                background: egui::Color32::from_rgb(244, 242, 236),
                panel_background: egui::Color32::from_rgb(226, 222, 212),
                text_color: egui::Color32::from_rgb(40, 40, 44),
                accent_color: egui::Color32::from_rgb(38, 96, 170),
                board_light: egui::Color32::from_rgb(252, 250, 244),
                board_dark: egui::Color32::from_rgb(188, 184, 172),
                queen_color: egui::Color32::from_rgb(16, 16, 20),
                threat_color: egui::Color32::from_rgba_unmultiplied(38, 96, 170, 40),
            },
        ]
    }

    /// Looks up a preset by name, falling back to the default theme.
    pub fn by_name(name: &str) -> Self {
        Self::presets()
            .into_iter()
            .find(|theme| theme.name == name)
            .unwrap_or_default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::presets()[0].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_finds_preset() {
        for preset in Theme::presets() {
            assert!(Theme::by_name(preset.name) == preset);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert!(Theme::by_name("No Such Theme") == Theme::default());
        assert_eq!(Theme::default().name, "Slate");
    }
}
