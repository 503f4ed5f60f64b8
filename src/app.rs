//! Main application state and UI.

use crate::api::{ApiClient, GasData, LithologyData, SummaryData};
use crate::fetch::FetchSlot;
use crate::pages;
use crate::pages::geology::GeologyPage;
use crate::pages::report::{ReportAction, ReportPage};
use crate::settings::Settings;
use crate::theme;
use chrono::{DateTime, Local};
use eframe::egui::{self, RichText};
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

/// Dashboard pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Overview,
    Summary,
    Geology,
    Gas,
    Report,
    Settings,
}

impl Page {
    fn label(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Summary => "Shift Summary",
            Page::Geology => "Geology",
            Page::Gas => "Gas Monitoring",
            Page::Report => "Report",
            Page::Settings => "Settings",
        }
    }

    fn all() -> &'static [Page] {
        &[
            Page::Overview,
            Page::Summary,
            Page::Geology,
            Page::Gas,
            Page::Report,
            Page::Settings,
        ]
    }
}

/// Main dashboard application
pub struct DashboardApp {
    // API status
    api_connected: bool,
    api_error: Option<String>,

    // Navigation
    page: Page,

    // Per-endpoint data
    summary: FetchSlot<SummaryData>,
    lithology: FetchSlot<LithologyData>,
    gas: FetchSlot<GasData>,
    report: FetchSlot<String>,

    // Page state
    geology_page: GeologyPage,
    report_page: ReportPage,

    // Refresh bookkeeping
    last_refresh: Option<Instant>,
    last_updated: Option<DateTime<Local>>,

    // Settings persistence
    settings: Settings,
    settings_dirty: bool,
    last_settings_save: Instant,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply(&cc.egui_ctx);

        let settings = Settings::load();
        let mut app = Self {
            api_connected: false,
            api_error: None,
            page: Page::Overview,
            summary: FetchSlot::new(),
            lithology: FetchSlot::new(),
            gas: FetchSlot::new(),
            report: FetchSlot::new(),
            geology_page: GeologyPage::new(),
            report_page: ReportPage::new(),
            last_refresh: None,
            last_updated: None,
            settings,
            settings_dirty: false,
            last_settings_save: Instant::now(),
        };

        // Check API connection and load initial data
        app.check_api();
        if app.api_connected {
            app.refresh_all();
        }

        app
    }

    fn client(&self) -> ApiClient {
        ApiClient::from_settings(&self.settings)
    }

    fn check_api(&mut self) {
        match self.client().health() {
            Ok(true) => {
                self.api_connected = true;
                self.api_error = None;
            }
            Ok(false) => {
                self.api_connected = false;
                self.api_error = Some("API unhealthy".to_string());
            }
            Err(e) => {
                warn!("backend unreachable: {}", e);
                self.api_connected = false;
                self.api_error = Some(e);
            }
        }
    }

    /// Kick off background fetches for the three data endpoints.
    fn refresh_all(&mut self) {
        self.last_refresh = Some(Instant::now());

        let api = self.client();
        let tx = self.summary.begin();
        thread::spawn(move || {
            let _ = tx.send(api.fetch_summary());
        });

        let api = self.client();
        let tx = self.lithology.begin();
        thread::spawn(move || {
            let _ = tx.send(api.fetch_lithology());
        });

        let api = self.client();
        let tx = self.gas.begin();
        thread::spawn(move || {
            let _ = tx.send(api.fetch_gas());
        });
    }

    fn generate_report(&mut self) {
        let api = self.client();
        self.report.reset();
        let tx = self.report.begin();
        thread::spawn(move || {
            let _ = tx.send(api.generate_report());
        });
    }

    fn poll_fetches(&mut self) {
        let mut landed = self.summary.poll();
        if self.lithology.poll() {
            landed = true;
            // Rebuild the cached band layout only when a new batch arrives.
            if let Some(data) = self.lithology.data() {
                self.geology_page.set_data(data);
            }
        }
        landed |= self.gas.poll();
        self.report.poll();

        if landed {
            self.last_updated = Some(Local::now());
            if let Some(err) = self
                .summary
                .error()
                .or_else(|| self.lithology.error())
                .or_else(|| self.gas.error())
            {
                warn!("data refresh failed: {}", err);
            } else {
                self.api_connected = true;
                self.api_error = None;
            }
        }
    }

    fn any_loading(&self) -> bool {
        self.summary.is_loading()
            || self.lithology.is_loading()
            || self.gas.is_loading()
            || self.report.is_loading()
    }

    fn maybe_auto_refresh(&mut self) {
        if !self.settings.auto_refresh_enabled {
            return;
        }
        let due = self
            .last_refresh
            .map_or(true, |t| t.elapsed().as_secs() >= self.settings.refresh_interval_secs);
        if due && !self.any_loading() {
            self.refresh_all();
        }
    }

    fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Save settings if dirty and enough time has passed (debounce)
    fn maybe_save_settings(&mut self) {
        if self.settings_dirty && self.last_settings_save.elapsed().as_secs() >= 2 {
            self.settings.save();
            self.settings_dirty = false;
            self.last_settings_save = Instant::now();
        }
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("TBM Monitor");
        ui.add_space(12.0);

        for page in Page::all() {
            if ui.selectable_label(self.page == *page, page.label()).clicked() {
                self.page = *page;
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        if self.api_connected {
            ui.colored_label(theme::accent::GREEN, "● API connected");
        } else {
            ui.colored_label(theme::accent::RED, "● API disconnected");
            if let Some(err) = &self.api_error {
                ui.label(RichText::new(err).size(11.0).color(theme::state::ERROR));
            }
            if ui.button("Retry").clicked() {
                self.check_api();
                if self.api_connected {
                    self.refresh_all();
                }
            }
        }

        ui.add_space(8.0);
        if ui
            .add_enabled(!self.any_loading(), egui::Button::new("⟳ Refresh data"))
            .clicked()
        {
            self.refresh_all();
        }
        if let Some(updated) = self.last_updated {
            ui.label(
                RichText::new(format!("Updated {}", updated.format("%H:%M:%S")))
                    .size(11.0)
                    .color(theme::text::MUTED),
            );
        }
        if self.any_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Loading...").color(theme::text::MUTED));
            });
        }
    }

    /// 2x2 grid of compact page renderings.
    fn render_overview(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |cols| {
            theme::card().show(&mut cols[0], |ui| {
                ui.label(RichText::new("Shift Summary").size(16.0).strong());
                ui.add_space(8.0);
                pages::summary::render(ui, &self.summary, true);
            });
            theme::card().show(&mut cols[1], |ui| {
                ui.label(RichText::new("Geology").size(16.0).strong());
                ui.add_space(8.0);
                self.geology_page.render(ui, &self.lithology, true);
            });
        });
        ui.add_space(16.0);
        let mut report_action = None;
        ui.columns(2, |cols| {
            theme::card().show(&mut cols[0], |ui| {
                ui.label(RichText::new("Gas Monitoring").size(16.0).strong());
                ui.add_space(8.0);
                pages::gas::render(ui, &self.gas, true);
            });
            theme::card().show(&mut cols[1], |ui| {
                ui.label(RichText::new("Report").size(16.0).strong());
                ui.add_space(8.0);
                report_action = self.report_page.render(ui, &self.report, true);
            });
        });
        if let Some(ReportAction::Generate) = report_action {
            self.generate_report();
        }
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        match self.page {
            Page::Overview => self.render_overview(ui),
            Page::Summary => pages::summary::render(ui, &self.summary, false),
            Page::Geology => self.geology_page.render(ui, &self.lithology, false),
            Page::Gas => pages::gas::render(ui, &self.gas, false),
            Page::Report => {
                if let Some(ReportAction::Generate) =
                    self.report_page.render(ui, &self.report, false)
                {
                    self.generate_report();
                }
            }
            Page::Settings => {
                if pages::settings_page::render(ui, &mut self.settings) {
                    self.mark_settings_dirty();
                }
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetches();
        self.maybe_auto_refresh();
        self.maybe_save_settings();

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| self.render_sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    self.render_page(ui);
                    ui.add_space(16.0);
                });
        });

        // Poll pending fetches without waiting for user input.
        if self.any_loading() {
            ctx.request_repaint_after(Duration::from_millis(150));
        } else if self.settings.auto_refresh_enabled {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
