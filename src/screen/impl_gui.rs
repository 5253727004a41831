use crate::error::{Notice, NoticeLevel};
use crate::predict_workflow::render::View;
use crate::preview_store::interface::{PreviewId, PreviewStore};
use crate::screen::interface::Screen;
use crate::user_input::interface::{InputEvent, UserInput};
use eframe::egui;
use std::collections::VecDeque;
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff"];

#[derive(Default)]
struct Shared {
    view: View,
    notices: VecDeque<Notice>,
}

/// A desktop window that is both the screen and the input of the workflow.
///
/// The window has to own the main thread, so [`ScreenGui::run_window`] is
/// called from `main` while the workflow loop runs elsewhere. Clones share
/// the same window state.
#[derive(Clone)]
pub struct ScreenGui {
    shared: Arc<Mutex<Shared>>,
    input_sender: Sender<InputEvent>,
    input_receiver: Arc<Mutex<Option<Receiver<InputEvent>>>>,
    preview_store: Arc<dyn PreviewStore + Send + Sync>,
}

impl ScreenGui {
    pub fn new(preview_store: Arc<dyn PreviewStore + Send + Sync>) -> Self {
        let (input_sender, input_receiver) = channel();
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            input_sender,
            input_receiver: Arc::new(Mutex::new(Some(input_receiver))),
            preview_store,
        }
    }

    /// Blocks until the window is closed, then asks the workflow to quit.
    pub fn run_window(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 560.0])
                .with_drag_and_drop(true),
            ..Default::default()
        };

        let window = PredictWindow {
            shared: self.shared.clone(),
            input_sender: self.input_sender.clone(),
            preview_store: self.preview_store.clone(),
            texture: None,
        };

        let result =
            eframe::run_native("Food Predict", options, Box::new(|_cc| Box::new(window)));
        let _ = self.input_sender.send(InputEvent::Quit);
        result.map_err(|e| e.to_string().into())
    }
}

impl Screen for ScreenGui {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shared.lock().map_err(|e| e.to_string())?.view = view.clone();
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shared
            .lock()
            .map_err(|e| e.to_string())?
            .notices
            .push_back(notice.clone());
        Ok(())
    }
}

impl UserInput for ScreenGui {
    fn events(&self) -> Receiver<InputEvent> {
        match self.input_receiver.lock().ok().and_then(|mut r| r.take()) {
            Some(receiver) => receiver,
            None => channel().1,
        }
    }
}

struct PredictWindow {
    shared: Arc<Mutex<Shared>>,
    input_sender: Sender<InputEvent>,
    preview_store: Arc<dyn PreviewStore + Send + Sync>,
    texture: Option<(PreviewId, egui::TextureHandle)>,
}

impl PredictWindow {
    fn send(&self, event: InputEvent) {
        let _ = self.input_sender.send(event);
    }

    fn preview_texture(
        &mut self,
        ctx: &egui::Context,
        preview: PreviewId,
    ) -> Option<egui::TextureHandle> {
        if let Some((id, texture)) = &self.texture {
            if *id == preview {
                return Some(texture.clone());
            }
        }

        let thumbnail = self.preview_store.thumbnail(preview)?;
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [thumbnail.width as usize, thumbnail.height as usize],
            &thumbnail.rgba,
        );
        let texture = ctx.load_texture("preview", image, egui::TextureOptions::default());
        // Dropping the old handle frees its texture.
        self.texture = Some((preview, texture.clone()));
        Some(texture)
    }
}

impl eframe::App for PredictWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.send(InputEvent::FilesPicked(dropped));
        }

        let (view, notice) = match self.shared.lock() {
            Ok(shared) => (shared.view.clone(), shared.notices.front().cloned()),
            Err(_) => return,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&view.title);
                ui.add_space(12.0);

                match &view.selection {
                    Some(selection) => {
                        match self.preview_texture(ctx, selection.preview) {
                            Some(texture) => {
                                ui.image((texture.id(), texture.size_vec2()));
                            }
                            None => {
                                ui.label("(no preview)");
                            }
                        }
                        ui.label(format!(
                            "{} ({}, {} bytes)",
                            selection.file_name, selection.media_type, selection.size_bytes
                        ));
                    }
                    None => {
                        ui.label("Drop a photo here");
                    }
                }

                if ui.button("Choose image...").clicked() {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("Images", &IMAGE_EXTENSIONS)
                        .pick_files()
                    {
                        self.send(InputEvent::FilesPicked(paths));
                    }
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let submit = egui::Button::new(&view.submit_label);
                    if ui.add_enabled(!view.busy, submit).clicked() {
                        self.send(InputEvent::Submit);
                    }
                    if view.busy {
                        ui.spinner();
                    }
                });

                if let Some(prediction) = &view.prediction {
                    ui.add_space(16.0);
                    ui.group(|ui| {
                        ui.label(egui::RichText::new("Prediction").strong().size(18.0));
                        ui.label(format!("Class ID: {}", prediction.class_id));
                        ui.label(format!("Thai Name: {}", prediction.th));
                        ui.label(format!("English Name: {}", prediction.en));
                    });
                }

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.small(&view.labels_status);
                    if ui.small_button("Reload").clicked() {
                        self.send(InputEvent::ReloadLabels);
                    }
                });
            });
        });

        if let Some(notice) = notice {
            let color = match notice.level {
                NoticeLevel::Warning => egui::Color32::from_rgb(230, 160, 0),
                NoticeLevel::Error => egui::Color32::from_rgb(210, 40, 40),
            };
            egui::Window::new(&notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(color, &notice.message);
                    if ui.button("OK").clicked() {
                        if let Ok(mut shared) = self.shared.lock() {
                            shared.notices.pop_front();
                        }
                    }
                });
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
