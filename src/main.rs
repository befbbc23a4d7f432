// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod config;
mod ui;

use clap::Parser;
use config::AppConfig;
use eframe::egui;
use log::info;
use statusboard_client::{render, DashboardController, HttpStatusSource};

const APP_TITLE: &str = "Statusboard";

#[derive(Parser, Debug)]
#[command(version, about = "Desktop status dashboard for a monitoring backend")]
struct Args {
    /// Backend base URL, e.g. http://status.internal/api/ (overrides the config file)
    #[arg(long, env = "STATUSBOARD_API_BASE_URL")]
    base_url: Option<String>,

    /// Print the configuration file path and exit
    #[arg(long)]
    print_config_path: bool,
}

#[derive(Debug)]
struct StatusboardApp {
    controller: DashboardController,
}

impl eframe::App for StatusboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = render::screen(&self.controller.snapshot());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::dashboard_view::show(ui, &screen);
        });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.print_config_path {
        println!("{}", AppConfig::config_path()?.display());
        return Ok(());
    }

    let config = AppConfig::load()?;
    let endpoints = config.resolve_endpoints(args.base_url.as_deref())?;
    let source = HttpStatusSource::new(endpoints);
    info!(
        "Starting {} against {} (components at {})",
        APP_TITLE,
        source.endpoints().server_info_url(),
        source.endpoints().components_url()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Light);

            let ctx = cc.egui_ctx.clone();
            let controller = DashboardController::spawn(source, move || ctx.request_repaint())?;
            Ok(Box::new(StatusboardApp { controller }))
        }),
    )?;

    Ok(())
}
