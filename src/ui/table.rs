use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::dashboard::TableRow;
use crate::data::model::Column;

const ROW_HEIGHT: f32 = 20.0;

/// Ranked detail table. Rows arrive already sorted.
pub fn ranked_table(ui: &mut Ui, rows: &[TableRow]) {
    TableBuilder::new(ui)
        .id_salt("ranked_table")
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(TableColumn::auto().at_least(60.0), Column::TABLE.len())
        .max_scroll_height(480.0)
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for col in Column::TABLE {
                header.col(|ui| {
                    ui.strong(col.header());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let data = &rows[row.index()];
                for cell in &data.cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
