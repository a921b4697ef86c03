use eframe::egui;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use eight_queens::render::notation;
use eight_queens::{Board, SolutionCatalog, Symmetry, ATTACKS};

use crate::theme::Theme;

/// Viewer preferences kept across sessions by eframe's storage.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    theme: String,
    speed: u64,
    show_threats: bool,
    only_unique: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default().name.to_owned(),
            speed: 5,
            show_threats: false,
            only_unique: false,
        }
    }
}

struct Particle {
    pos: egui::Pos2,
    vel: egui::Vec2,
    color: egui::Color32,
    life: f32, // 1.0 down to 0.0
    size: f32,
}

pub struct EightQueensApp {
    catalog: SolutionCatalog,
    /// Position in the visible list, not in the catalogue.
    cursor: usize,
    symmetry: Symmetry,

    speed: u64, // 1-10
    playing: bool,
    last_update: Instant,

    theme: Theme,
    show_threats: bool,
    only_unique: bool,
    particles: Vec<Particle>,
}

impl EightQueensApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let catalog = SolutionCatalog::build();
        let stats = catalog.stats();
        log::info!(
            "search pushed {} frames and hit {} dead ends",
            stats.frames_pushed,
            stats.dead_ends
        );

        Self {
            catalog,
            cursor: 0,
            symmetry: Symmetry::Identity,
            speed: settings.speed.clamp(1, 10),
            playing: false,
            last_update: Instant::now(),
            theme: Theme::by_name(&settings.theme),
            show_threats: settings.show_threats,
            only_unique: settings.only_unique,
            particles: Vec::new(),
        }
    }

    fn settings(&self) -> Settings {
        Settings {
            theme: self.theme.name.to_owned(),
            speed: self.speed,
            show_threats: self.show_threats,
            only_unique: self.only_unique,
        }
    }

    /// Catalogue indices currently shown, honouring the unique filter.
    fn visible(&self) -> Vec<usize> {
        self.catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| !self.only_unique || entry.representative)
            .map(|(i, _)| i)
            .collect()
    }

    fn current_index(&self) -> Option<usize> {
        self.visible().get(self.cursor).copied()
    }

    /// The selected solution with the chosen symmetry applied.
    fn displayed_board(&self) -> Board {
        self.current_index()
            .and_then(|i| self.catalog.get(i))
            .map(|entry| self.symmetry.apply(entry.board))
            .unwrap_or(Board::EMPTY)
    }

    fn step(&mut self, delta: isize) {
        let len = self.visible().len() as isize;
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    fn jump_random(&mut self) {
        use rand::Rng;
        let len = self.visible().len();
        if len > 0 {
            self.cursor = rand::thread_rng().gen_range(0..len);
        }
    }

    fn set_only_unique(&mut self, only_unique: bool) {
        if only_unique == self.only_unique {
            return;
        }
        // Keep the same symmetry class in view across the filter change.
        let class = self
            .current_index()
            .and_then(|i| self.catalog.get(i))
            .map(|entry| entry.class);
        self.only_unique = only_unique;
        let visible = self.visible();
        self.cursor = class
            .and_then(|class| {
                visible
                    .iter()
                    .position(|&i| self.catalog.entries()[i].class == class)
            })
            .unwrap_or(0);
    }

    fn spawn_particles(&mut self, pos: egui::Pos2, color: egui::Color32) {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..30 {
            let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.gen_range(100.0..500.0);
            self.particles.push(Particle {
                pos,
                vel: egui::vec2(angle.cos() * speed, angle.sin() * speed - 200.0),
                color,
                life: 1.0,
                size: rng.gen_range(3.0..7.0),
            });
        }
    }

    fn export_csv(&self) {
        let entries: Vec<_> = self
            .visible()
            .into_iter()
            .filter_map(|i| self.catalog.get(i))
            .collect();
        let file_name = if self.only_unique {
            "eight_queens_unique.csv"
        } else {
            "eight_queens_all.csv"
        };

        #[cfg(target_arch = "wasm32")]
        match eight_queens::export::to_csv_string(entries.iter().copied()) {
            Ok(content) => {
                if let Err(err) = web_csv_download(&content, file_name) {
                    log::error!("CSV download failed: {err:?}");
                }
            }
            Err(err) => log::error!("CSV export failed: {err}"),
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(file_name)
            .save_file()
        {
            match eight_queens::export::export_to_path(&path, entries.iter().copied()) {
                Ok(()) => log::info!("exported {} solutions to {}", entries.len(), path.display()),
                Err(err) => log::error!("CSV export to {} failed: {err}", path.display()),
            }
        }
    }

    /// Navigation buttons. Returns true when the selection moved.
    fn controls(&mut self, ui: &mut egui::Ui, btn_size: egui::Vec2) -> bool {
        let mut moved = false;
        if ui.add_sized(btn_size, egui::Button::new("◀")).clicked() {
            self.step(-1);
            self.playing = false;
            moved = true;
        }
        let play_label = if self.playing { "⏸" } else { "▶" };
        if ui.add_sized(btn_size, egui::Button::new(play_label)).clicked() {
            self.playing = !self.playing;
            self.last_update = Instant::now();
        }
        if ui.add_sized(btn_size, egui::Button::new("|▶")).clicked() {
            self.step(1);
            self.playing = false;
            moved = true;
        }
        if ui.add_sized(btn_size, egui::Button::new("Random")).clicked() {
            self.jump_random();
            self.playing = false;
            moved = true;
        }
        if ui.add_sized(btn_size, egui::Button::new("◼")).clicked() {
            self.playing = false;
            self.cursor = 0;
            self.symmetry = Symmetry::Identity;
        }
        moved
    }

    fn symmetry_picker(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_id_salt("symmetry_picker")
            .selected_text(self.symmetry.label())
            .show_ui(ui, |ui| {
                for symmetry in Symmetry::ALL {
                    ui.selectable_value(&mut self.symmetry, symmetry, symmetry.label());
                }
            });
    }

    fn theme_picker(&mut self, ui: &mut egui::Ui) {
        egui::ComboBox::from_id_salt("theme_picker")
            .selected_text(self.theme.name)
            .show_ui(ui, |ui| {
                for preset in Theme::presets() {
                    ui.selectable_value(&mut self.theme, preset.clone(), preset.name);
                }
            });
    }

    fn summary_label(&self) -> String {
        let Some(entry) = self.current_index().and_then(|i| self.catalog.get(i)) else {
            return "No solution selected".to_owned();
        };
        let class_size = self.catalog.class_size(entry.class).unwrap_or(0);
        format!(
            "Solution {} of {} · class {} of {} ({} symmetric forms)",
            self.cursor + 1,
            self.visible().len(),
            entry.class + 1,
            self.catalog.unique_len(),
            class_size
        )
    }

    fn history(&mut self, ui: &mut egui::Ui) {
        let visible = self.visible();
        egui::ScrollArea::vertical()
            .max_height(200.0)
            .show(ui, |ui| {
                for (pos, &i) in visible.iter().enumerate() {
                    let entry = &self.catalog.entries()[i];
                    let tag = if entry.representative { "" } else { "(Sym) " };
                    let text = egui::RichText::new(format!(
                        "#{}: {}{}",
                        i + 1,
                        tag,
                        notation(entry.board)
                    ))
                    .monospace()
                    .size(12.0);
                    if ui.selectable_label(pos == self.cursor, text).clicked() {
                        self.cursor = pos;
                        self.playing = false;
                    }
                }
            });
    }
}

impl eframe::App for EightQueensApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- Animation Update ---
        let dt = ctx.input(|i| i.stable_dt);
        self.particles.retain_mut(|p| {
            p.pos += p.vel * dt;
            p.vel.y += 800.0 * dt; // Gravity
            p.life -= dt * 1.5;
            p.life > 0.0
        });

        let delay = Duration::from_millis((11 - self.speed) * 100);
        let mut moved = false;
        if self.playing {
            if self.last_update.elapsed() >= delay {
                self.step(1);
                self.last_update = Instant::now();
                moved = true;
            }
            ctx.request_repaint_after(delay);
        }
        if !self.particles.is_empty() {
            ctx.request_repaint();
        }

        let panel_frame = egui::Frame::none()
            .fill(self.theme.panel_background)
            .inner_margin(12.0)
            .rounding(10.0)
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(20)));

        let screen_rect = ctx.screen_rect();
        let is_mobile = screen_rect.width() < 700.0;

        if is_mobile {
            egui::TopBottomPanel::top("mobile_top")
                .frame(panel_frame.inner_margin(egui::Margin::symmetric(10.0, 5.0)))
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("♛ 8-Queens")
                                .strong()
                                .color(self.theme.accent_color),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} / {}",
                                    self.cursor + 1,
                                    self.visible().len()
                                ))
                                .strong(),
                            );
                        });
                    });
                });

            egui::TopBottomPanel::bottom("mobile_bottom")
                .frame(panel_frame.inner_margin(egui::Margin::symmetric(15.0, 10.0)))
                .show(ctx, |ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label("Speed:");
                            ui.add(egui::Slider::new(&mut self.speed, 1..=10).show_value(true));
                            self.symmetry_picker(ui);
                        });

                        ui.add_space(8.0);

                        ui.horizontal(|ui| {
                            let mut only_unique = self.only_unique;
                            if ui.checkbox(&mut only_unique, "Unique Only").changed() {
                                self.set_only_unique(only_unique);
                            }
                            ui.checkbox(&mut self.show_threats, "Threats");
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Export").clicked() {
                                        self.export_csv();
                                    }
                                },
                            );
                        });

                        ui.add_space(8.0);

                        ui.horizontal_centered(|ui| {
                            let b_size = egui::vec2(ui.available_width() / 5.0 - 5.0, 45.0);
                            moved |= self.controls(ui, b_size);
                        });
                    });
                });
        } else {
            egui::SidePanel::right("controls")
                .frame(panel_frame)
                .min_width(320.0)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(8.0);
                            ui.label(
                                egui::RichText::new("♛ 8-Queens")
                                    .size(24.0)
                                    .strong()
                                    .color(self.theme.text_color),
                            );
                        });
                        ui.add_space(20.0);
                        ui.label(
                            egui::RichText::new("Controls")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        ui.horizontal_wrapped(|ui| {
                            moved |= self.controls(ui, egui::vec2(50.0, 40.0));
                        });

                        ui.add_space(10.0);
                        ui.label("Speed");
                        ui.add(egui::Slider::new(&mut self.speed, 1..=10).text("Speed"));

                        ui.add_space(10.0);
                        ui.checkbox(&mut self.show_threats, "Show Threatened Squares");
                        let mut only_unique = self.only_unique;
                        if ui
                            .checkbox(&mut only_unique, "Show Unique Solutions Only")
                            .changed()
                        {
                            self.set_only_unique(only_unique);
                        }

                        ui.add_space(10.0);
                        ui.label("Symmetry:");
                        self.symmetry_picker(ui);
                        ui.label("Theme:");
                        self.theme_picker(ui);

                        ui.add_space(20.0);
                        ui.label(egui::RichText::new(self.summary_label()).strong().size(14.0));
                        let board = self.displayed_board();
                        ui.label(
                            egui::RichText::new(format!(
                                "Canonical: {:#018x}",
                                eight_queens::canonical(board).0
                            ))
                            .monospace(),
                        );
                        ui.label(
                            egui::RichText::new(format!("Board:     {:#018x}", board.0))
                                .monospace(),
                        );
                        let stats = self.catalog.stats();
                        ui.label(format!(
                            "Search: {} frames, {} dead ends",
                            stats.frames_pushed, stats.dead_ends
                        ));

                        ui.add_space(10.0);
                        if ui.button("Export to CSV").clicked() {
                            self.export_csv();
                        }

                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new("Solutions")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        self.history(ui);
                    });
                });
        }

        if moved {
            let center = ctx.screen_rect().center();
            self.spawn_particles(center, self.theme.accent_color);
        }

        let board = self.displayed_board();
        let threatened = ATTACKS.threatened(board) & !board;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(ctx, |ui| {
                let available_rect = ui.available_rect_before_wrap();
                let margin = if is_mobile { 10.0 } else { 60.0 };
                let size = (available_rect.height() - margin)
                    .min(available_rect.width() - margin)
                    .max(0.0);
                let center = available_rect.center();

                let board_rect = egui::Rect::from_center_size(center, egui::vec2(size, size));

                ui.painter().rect_filled(
                    board_rect.expand(5.0),
                    5.0,
                    self.theme.text_color.linear_multiply(0.2),
                );

                let cell_size = size / 8.0;
                let painter = ui.painter();

                // Attack mask of the hovered cell.
                let hovered = ui
                    .input(|i| i.pointer.hover_pos())
                    .and_then(|pos| cell_at(board_rect, pos))
                    .map(|(row, col)| ATTACKS.at(row, col))
                    .unwrap_or(Board::EMPTY);

                for row in 0..8 {
                    for col in 0..8 {
                        let cell_rect = cell_rect(board_rect, row, col);

                        // a1 is a dark square.
                        let color = if (row + col) % 2 == 0 {
                            self.theme.board_dark
                        } else {
                            self.theme.board_light
                        };

                        painter.rect_filled(cell_rect, 0.0, color);

                        if self.show_threats && threatened.get(row, col) {
                            painter.rect_filled(cell_rect.shrink(2.0), 2.0, self.theme.threat_color);
                        }
                        if hovered.get(row, col) {
                            painter.rect_stroke(
                                cell_rect.shrink(3.0),
                                2.0,
                                egui::Stroke::new(2.0, self.theme.accent_color),
                            );
                        }

                        // Queens fade in and out as the selection changes.
                        let alpha = ctx.animate_bool(queen_anim_id(row, col), board.get(row, col));
                        if alpha > 0.0 {
                            painter.text(
                                cell_rect.center(),
                                egui::Align2::CENTER_CENTER,
                                "♛",
                                egui::FontId::proportional(cell_size * 0.7),
                                self.theme.queen_color.linear_multiply(alpha),
                            );
                        }
                    }
                }

                for p in &self.particles {
                    painter.circle_filled(p.pos, p.size, p.color.linear_multiply(p.life));
                }

                // Files along the bottom, ranks up the left, row 0 is rank 1.
                for i in 0..8 {
                    let font_id = egui::FontId::proportional(cell_size * 0.15);
                    let col_char = (b'a' + i as u8) as char;
                    let row_char = (i + 1).to_string();

                    let x = board_rect.min.x + i as f32 * cell_size + cell_size / 2.0;
                    let y = board_rect.max.y + 10.0;
                    painter.text(
                        egui::pos2(x, y),
                        egui::Align2::CENTER_TOP,
                        col_char.to_string(),
                        font_id.clone(),
                        self.theme.text_color,
                    );

                    let x = board_rect.min.x - 10.0;
                    let y = board_rect.max.y - i as f32 * cell_size - cell_size / 2.0;
                    painter.text(
                        egui::pos2(x, y),
                        egui::Align2::RIGHT_CENTER,
                        row_char,
                        font_id,
                        self.theme.text_color,
                    );
                }
            });
    }
}

/// Screen rectangle of `(row, col)`; row 0 is drawn along the bottom edge.
fn cell_rect(board_rect: egui::Rect, row: usize, col: usize) -> egui::Rect {
    let cell_size = board_rect.width() / 8.0;
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.min.x + col as f32 * cell_size,
            board_rect.max.y - (row + 1) as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

/// Board cell under `pos`, if any.
fn cell_at(board_rect: egui::Rect, pos: egui::Pos2) -> Option<(usize, usize)> {
    let cell_size = board_rect.width() / 8.0;
    if cell_size <= 0.0 || !board_rect.contains(pos) {
        return None;
    }
    let col = (((pos.x - board_rect.min.x) / cell_size) as usize).min(7);
    let row = (((board_rect.max.y - pos.y) / cell_size) as usize).min(7);
    Some((row, col))
}

fn queen_anim_id(row: usize, col: usize) -> egui::Id {
    egui::Id::new(("queen", row, col))
}

#[cfg(target_arch = "wasm32")]
fn web_csv_download(content: &str, file_name: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &parts,
        web_sys::BlobPropertyBag::new().type_("text/csv"),
    )?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let a = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    a.set_href(&url);
    a.set_download(file_name);
    a.click();
    web_sys::Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(400.0, 400.0))
    }

    #[test]
    fn test_row_zero_is_drawn_at_the_bottom() {
        let rect = board_rect();
        let a1 = cell_rect(rect, 0, 0);
        assert_eq!(a1.min, egui::pos2(100.0, 400.0));
        assert_eq!(a1.max, egui::pos2(150.0, 450.0));
        let h8 = cell_rect(rect, 7, 7);
        assert_eq!(h8.min, egui::pos2(450.0, 50.0));
    }

    #[test]
    fn test_cell_at_inverts_cell_rect() {
        let rect = board_rect();
        for row in 0..8 {
            for col in 0..8 {
                let centre = cell_rect(rect, row, col).center();
                assert_eq!(cell_at(rect, centre), Some((row, col)));
            }
        }
        assert_eq!(cell_at(rect, egui::pos2(0.0, 0.0)), None);
        let empty = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(0.0, 0.0));
        assert_eq!(cell_at(empty, egui::pos2(0.0, 0.0)), None);
    }

    #[test]
    fn test_rotate90_turns_clockwise_on_screen() {
        use eight_queens::symmetry::rotate90;
        let rect = board_rect();
        let mut corner = Board::EMPTY;
        corner.set(0, 0);
        // Bottom-left goes to top-left.
        let (row, col) = rotate90(corner).queens().next().unwrap();
        let moved = cell_rect(rect, row, col).center();
        let start = cell_rect(rect, 0, 0).center();
        assert_eq!(moved.x, start.x);
        assert!(moved.y < start.y);
    }

    #[test]
    fn test_queen_anim_ids_depend_only_on_cell() {
        let ids: HashSet<_> = (0..8)
            .flat_map(|row| (0..8).map(move |col| queen_anim_id(row, col)))
            .collect();
        assert_eq!(ids.len(), 64);
        assert_eq!(queen_anim_id(3, 4), queen_anim_id(3, 4));
    }
}
