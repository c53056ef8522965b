//! Terminal rendering of forecast results

use crate::engine::ForecastOutcome;
use crate::error::Result;
use std::io::Write;

const TILES_PER_ROW: usize = 3;
const TILE_WIDTH: usize = 22;
const BAR_WIDTH: usize = 40;

/// Render all three report sections: metric tiles, bar chart, detail table
pub fn render_report<W: Write>(out: &mut W, outcome: &ForecastOutcome) -> Result<()> {
    writeln!(
        out,
        "Production Targets: {} {}",
        outcome.month_name, outcome.year
    )?;
    writeln!(out)?;
    render_metrics(out, outcome)?;
    writeln!(out)?;
    writeln!(out, "Production Distribution")?;
    render_bar_chart(out, outcome)?;
    writeln!(out)?;
    writeln!(out, "Detailed Data")?;
    render_table(out, outcome)?;
    Ok(())
}

/// Grid of labeled quantity tiles, three per row
pub fn render_metrics<W: Write>(out: &mut W, outcome: &ForecastOutcome) -> Result<()> {
    for row in outcome.items.chunks(TILES_PER_ROW) {
        let mut labels = String::new();
        let mut values = String::new();
        for item in row {
            labels.push_str(&format!("{:<width$}", item.product, width = TILE_WIDTH));
            values.push_str(&format!(
                "{:<width$}",
                thousands(item.quantity),
                width = TILE_WIDTH
            ));
        }
        writeln!(out, "{}", labels.trim_end())?;
        writeln!(out, "{}", values.trim_end())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Horizontal bar chart, one bar per product in sorted order.
///
/// Bar length scales against the largest quantity; glyph density stands in
/// for color intensity. Non-positive quantities render an empty bar.
pub fn render_bar_chart<W: Write>(out: &mut W, outcome: &ForecastOutcome) -> Result<()> {
    let max = outcome
        .items
        .iter()
        .map(|item| item.quantity)
        .max()
        .unwrap_or(0);
    let name_width = outcome
        .items
        .iter()
        .map(|item| item.product.len())
        .max()
        .unwrap_or(0);

    for item in &outcome.items {
        let bar = if max > 0 && item.quantity > 0 {
            let ratio = item.quantity as f64 / max as f64;
            let len = ((ratio * BAR_WIDTH as f64).round() as usize).max(1);
            bar_glyph(ratio).to_string().repeat(len)
        } else {
            String::new()
        };
        writeln!(
            out,
            "{:<name_width$} | {} {}",
            item.product,
            bar,
            thousands(item.quantity)
        )?;
    }
    Ok(())
}

/// Full detail table with a running index
pub fn render_table<W: Write>(out: &mut W, outcome: &ForecastOutcome) -> Result<()> {
    let name_width = outcome
        .items
        .iter()
        .map(|item| item.product.len())
        .max()
        .unwrap_or(0)
        .max("Product Name".len());

    writeln!(
        out,
        "{:>4}  {:<name_width$}  {}",
        "#", "Product Name", "Suggested Quantity"
    )?;
    for (index, item) in outcome.items.iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:<name_width$}  {}",
            index,
            item.product,
            thousands(item.quantity)
        )?;
    }
    Ok(())
}

/// Write the detail table as CSV
pub fn write_csv<W: Write>(out: W, outcome: &ForecastOutcome) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Product Name", "Suggested Quantity"])?;
    for item in &outcome.items {
        writer.write_record([item.product.as_str(), &item.quantity.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn bar_glyph(ratio: f64) -> char {
    if ratio > 0.75 {
        '█'
    } else if ratio > 0.5 {
        '▓'
    } else if ratio > 0.25 {
        '▒'
    } else {
        '░'
    }
}

/// Format an integer with thousands separators
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
        if digits.len() > lead {
            grouped.push(',');
        }
    }
    for (i, chunk) in digits[lead..].as_bytes().chunks(3).enumerate() {
        if i > 0 {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap());
    }
    grouped
}
