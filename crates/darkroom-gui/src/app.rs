use std::collections::HashMap;
use std::sync::mpsc;

use darkroom_core::config::GatewayConfig;
use darkroom_core::gateway::GatewayTask;
use darkroom_core::revision::{Revision, RevisionId};
use darkroom_core::session::Session;
use darkroom_core::voice::VoiceCapture;
use tracing::warn;

use crate::convert::payload_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{PaneState, UiState};
use crate::worker;

pub struct DarkroomApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub voice: VoiceCapture,
    pub ui_state: UiState,
    /// Left pane shows the session original, right pane the current revision.
    pub before_pane: PaneState,
    pub after_pane: PaneState,
    /// History thumbnails keyed by revision. `None` marks a failed decode
    /// so it is not retried every frame.
    pub history_thumbs: HashMap<RevisionId, Option<egui::TextureHandle>>,
    /// Last transcript value mirrored into the revise field.
    pub last_transcript: String,
    pub show_about: bool,
}

impl DarkroomApp {
    pub fn new(ctx: &egui::Context, config: GatewayConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(config, result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            session: Session::new(),
            // No speech engine ships with the desktop build; the mic
            // control stays hidden.
            voice: VoiceCapture::unsupported(),
            ui_state: UiState::default(),
            before_pane: PaneState::default(),
            after_pane: PaneState::default(),
            history_thumbs: HashMap::new(),
            last_transcript: String::new(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FileLoaded { path, payload } => {
                    self.ui_state.add_log(format!("Opened: {}", path.display()));
                    self.session.upload(payload);
                }
                WorkerResult::FileFailed { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.session.fail_upload();
                }
                WorkerResult::TaskFinished {
                    task,
                    result,
                    elapsed,
                } => {
                    match &result {
                        Ok(_) => self.ui_state.add_log(format!(
                            "Finished {} in {}",
                            task.kind(),
                            format_duration(elapsed)
                        )),
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                    self.session.finish(task, result);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Rebuild pane textures when the displayed revisions changed.
    fn sync_panes(&mut self, ctx: &egui::Context) {
        sync_pane(ctx, &mut self.before_pane, "before", self.session.original());
        sync_pane(ctx, &mut self.after_pane, "after", self.session.current());
    }

    /// Drop thumbnails of revisions pruned by a revert or reset.
    fn prune_thumbnails(&mut self) {
        let history = self.session.history();
        self.history_thumbs.retain(|id, _| history.contains(*id));
    }

    /// Keep the revise field following the live transcript while the
    /// microphone is capturing.
    fn mirror_transcript(&mut self) {
        let transcript = self.voice.transcript();
        if !transcript.is_empty() && transcript != self.last_transcript {
            self.last_transcript = transcript.to_string();
            self.ui_state.revise_prompt = self.last_transcript.clone();
        }
    }

    /// Hand a prepared gateway task to the worker. The After pane drops
    /// its zoom/pan as soon as loading starts.
    pub fn run_task(&mut self, task: GatewayTask) {
        self.after_pane.viewport.reset();
        self.send_command(WorkerCommand::RunTask { task });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

fn sync_pane(ctx: &egui::Context, pane: &mut PaneState, name: &str, revision: Option<&Revision>) {
    if pane.revision_id == revision.map(|r| r.id()) {
        return;
    }
    match revision {
        Some(rev) => {
            match payload_to_color_image(rev.image()) {
                Ok(image) => {
                    let size = egui::vec2(image.size[0] as f32, image.size[1] as f32);
                    let texture = ctx.load_texture(
                        format!("{name}-{}", rev.id()),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    pane.texture = Some(texture);
                    pane.image_size = Some(size);
                }
                Err(e) => {
                    warn!(id = %rev.id(), error = %e, "revision does not decode for display");
                    pane.texture = None;
                    pane.image_size = None;
                }
            }
            pane.revision_id = Some(rev.id());
        }
        None => pane.clear(),
    }
    // Stale zoom/pan never survives an image change.
    pane.viewport.reset();
}

impl eframe::App for DarkroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.sync_panes(ctx);
        self.prune_thumbnails();
        self.mirror_transcript();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::panes::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Darkroom")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Darkroom");
                        ui.label("AI Photo Revision Studio");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
