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

//! Paints a [`Screen`] into an egui panel.

use egui_extras::{Column, TableBuilder};
use statusboard_client::render::{DashboardTable, Row, Screen};
use statusboard_client::Badge;

use super::palette;

const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 36.0;

pub fn show(ui: &mut egui::Ui, screen: &Screen) {
    match screen {
        Screen::Loading { message } => show_loading(ui, message),
        Screen::Error { heading, message } => show_error(ui, heading, message),
        Screen::Table(table) => show_table(ui, table),
    }
}

fn show_loading(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(message)
            .color(palette::BODY_TEXT)
            .size(16.0));
    });
}

fn show_error(ui: &mut egui::Ui, heading: &str, message: &str) {
    ui.add_space(16.0);
    egui::Frame::new()
        .fill(palette::ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, palette::ERROR_STROKE))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(heading)
                    .color(palette::ERROR_TEXT)
                    .strong());
                ui.label(egui::RichText::new(message)
                    .color(palette::ERROR_TEXT));
            });
        });
}

fn show_table(ui: &mut egui::Ui, table: &DashboardTable) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(&table.title)
        .color(palette::HEADING_TEXT)
        .size(22.0)
        .strong());
    ui.add_space(12.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(280.0).at_least(160.0).clip(true))
        .column(Column::exact(110.0))
        .column(Column::remainder().clip(true))
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|_ui| {});
            header.col(|ui| {
                ui.label(egui::RichText::new(table.status_heading)
                    .color(palette::HEADING_TEXT)
                    .strong());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new(table.details_heading)
                    .color(palette::HEADING_TEXT)
                    .strong());
            });
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    table_row.col(|ui| name_cell(ui, row));
                    table_row.col(|ui| badge(ui, row.badge));
                    table_row.col(|ui| details_cell(ui, row));
                });
            }
        });
}

fn name_cell(ui: &mut egui::Ui, row: &Row) {
    ui.label(egui::RichText::new(palette::icon_glyph(row.icon))
        .color(palette::BODY_TEXT)
        .size(18.0))
        .on_hover_text(row.icon.name());
    ui.label(egui::RichText::new(&row.name)
        .color(palette::HEADING_TEXT)
        .strong())
        .on_hover_text(format!("id: {}", row.id));
}

fn badge(ui: &mut egui::Ui, badge: Badge) {
    let (fill, text) = palette::badge_colors(badge.style);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(10, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(badge.label)
                .color(text)
                .size(12.0)
                .strong());
        });
}

fn details_cell(ui: &mut egui::Ui, row: &Row) {
    let text = if row.details_is_placeholder {
        egui::RichText::new(&row.details)
            .color(palette::MUTED_TEXT)
            .italics()
    } else {
        egui::RichText::new(&row.details)
            .color(palette::BODY_TEXT)
    };
    ui.add(egui::Label::new(text).truncate())
        .on_hover_text(&row.details);
}
