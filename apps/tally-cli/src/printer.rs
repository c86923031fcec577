//! # Receipt Printer
//!
//! Turns a computed [`Receipt`] into text lines.
//!
//! ```text
//! -------------------------------------
//!            TICKET DE COMPRA
//! -------------------------------------
//! Legumbres         2 x 2.00€ =  4.00€
//! Perfume           3 x 20.00€ = 60.00€
//! -------------------------------------
//! Subtotal:        64.00€
//! IVA (standard):      13.44€
//! -------------------------------------
//! TOTAL:           77.44€
//! -------------------------------------
//! ```
//!
//! Pass-through only: every figure comes from the receipt. Amounts are shown
//! with two decimals through `Money`'s `Display`.

use std::io::{self, Write};

use tally_core::Receipt;

use crate::config::PrintConfig;

/// Renders the receipt as text lines (no trailing newlines).
pub fn render_receipt(receipt: &Receipt, config: &PrintConfig) -> Vec<String> {
    let rule = "-".repeat(config.width);
    let width = config.width;
    let sym = &config.currency_symbol;

    let mut out = Vec::with_capacity(receipt.line_count() + receipt.tax_breakdown().len() + 10);

    out.push(rule.clone());
    out.push(centered(&config.title, width));
    if let Some(store) = &config.store_name {
        out.push(centered(store, width));
    }
    out.push(rule.clone());

    for line in receipt.lines() {
        out.push(format!(
            "{:<15} {:>3} x {}{sym} = {:>5}{sym}",
            line.name, line.quantity, line.unit_price, line.pre_tax_amount
        ));
    }

    out.push(rule.clone());
    out.push(format!("Subtotal:        {}{sym}", receipt.totals().subtotal));
    for entry in receipt.tax_breakdown() {
        out.push(format!(
            "{} ({}):      {}{sym}",
            config.tax_label, entry.tax_category, entry.amount
        ));
    }
    out.push(rule.clone());
    out.push(format!("TOTAL:           {}{sym}", receipt.totals().grand_total));
    out.push(rule);

    out
}

/// Centers `text` in `width` columns; an odd leftover space goes on the left.
/// Trailing padding is dropped.
fn centered(text: &str, width: usize) -> String {
    let slack = width.saturating_sub(text.chars().count());
    let left = slack - slack / 2;
    format!("{}{text}", " ".repeat(left))
}

/// Writes the rendered receipt, one line per row.
pub fn write_receipt<W: Write>(receipt: &Receipt, config: &PrintConfig, out: &mut W) -> io::Result<()> {
    for line in render_receipt(receipt, config) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_basket;
    use tally_core::{compute_receipt, LineItem, Money, Product, TaxCategory};

    fn demo_lines() -> Vec<String> {
        let receipt = compute_receipt(&demo_basket()).unwrap();
        render_receipt(&receipt, &PrintConfig::default())
    }

    #[test]
    fn test_demo_receipt_layout() {
        let rule = "-".repeat(37);
        let expected = vec![
            rule.clone(),
            "           TICKET DE COMPRA".to_string(),
            rule.clone(),
            "Legumbres         2 x 2.00€ =  4.00€".to_string(),
            "Perfume           3 x 20.00€ = 60.00€".to_string(),
            "Leche             6 x 1.00€ =  6.00€".to_string(),
            "Lasaña            1 x 5.00€ =  5.00€".to_string(),
            rule.clone(),
            "Subtotal:        75.00€".to_string(),
            "IVA (standard):      13.44€".to_string(),
            "IVA (superReducedC):      0.00€".to_string(),
            "IVA (superReducedA):      0.25€".to_string(),
            rule.clone(),
            "TOTAL:           88.69€".to_string(),
            rule,
        ];
        assert_eq!(demo_lines(), expected);
    }

    #[test]
    fn test_store_name_and_symbol_from_config() {
        let receipt = compute_receipt(&demo_basket()).unwrap();
        let config = PrintConfig {
            store_name: Some("Ultramarinos Paco".to_string()),
            currency_symbol: "$".to_string(),
            tax_label: "VAT".to_string(),
            width: 20,
            ..PrintConfig::default()
        };
        let lines = render_receipt(&receipt, &config);

        assert_eq!(lines[0], "-".repeat(20));
        assert_eq!(lines[2], "  Ultramarinos Paco");
        assert!(lines.contains(&"VAT (standard):      13.44$".to_string()));
        assert_eq!(lines[lines.len() - 2], "TOTAL:           88.69$");
    }

    #[test]
    fn test_centered_puts_odd_space_on_the_left() {
        assert_eq!(
            centered("TICKET DE COMPRA", 37),
            format!("{}TICKET DE COMPRA", " ".repeat(11))
        );
        assert_eq!(centered("ab", 6), "  ab");
        assert_eq!(centered("Lasaña", 8), " Lasaña");
        assert_eq!(centered("too wide", 4), "too wide");
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = compute_receipt(&[]).unwrap();
        let lines = render_receipt(&receipt, &PrintConfig::default());

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[4], "Subtotal:        0.00€");
        assert_eq!(lines[6], "TOTAL:           0.00€");
    }

    #[test]
    fn test_category_amount_shown_at_two_decimals() {
        let items: Vec<LineItem> = (0..3)
            .map(|i| {
                LineItem::new(
                    Product::new(
                        format!("Chicle {i}"),
                        Money::from_cents(10),
                        TaxCategory::SuperReducedA,
                    ),
                    1,
                )
            })
            .collect();
        let receipt = compute_receipt(&items).unwrap();
        let lines = render_receipt(&receipt, &PrintConfig::default());

        // 3 × 0.005 accumulated, shown once rounded
        assert!(lines.contains(&"IVA (superReducedA):      0.02€".to_string()));
    }

    #[test]
    fn test_write_receipt() {
        let receipt = compute_receipt(&demo_basket()).unwrap();
        let mut buf = Vec::new();
        write_receipt(&receipt, &PrintConfig::default(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 15);
        assert!(text.ends_with("-------------------------------------\n"));
    }
}
