use gigboard_model::{format, Bid};
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;

use crate::config::DisplayOptions;

/// Serialize a bid for display.
pub(crate) fn bid_row(bid: &Bid) -> eyre::Result<Value> {
    Ok(json!({
        "id": bid.id.get(),
        "gig_id": bid.gig_id,
        "gig_title": bid.gig_title,
        "brand": bid.brand,
        "category": bid.category,
        "budget_range": bid.budget_range,
        "amount": format::usd(&bid.bid_amount),
        "top_bid": bid.top_bid.as_ref().map(format::usd),
        "to_lead": bid.amount_to_lead().as_ref().map(format::usd),
        "status": bid.status.as_str(),
        "time_left": bid.time_left,
        "pitch": bid.pitch,
        "submitted_at": bid.submitted_at.format(&Rfc3339)?,
    }))
}

pub(crate) fn bid_table() -> DisplayOptions {
    DisplayOptions::table_projection([
        ("id", "ID"),
        ("gig_title", "Gig"),
        ("brand", "Brand"),
        ("amount", "Bid"),
        ("top_bid", "Top Bid"),
        ("status", "Status"),
        ("time_left", "Time Left"),
    ])
}

pub(crate) fn bid_detail() -> DisplayOptions {
    DisplayOptions::table_projection([
        ("id", "ID"),
        ("gig_id", "Gig ID"),
        ("gig_title", "Gig"),
        ("brand", "Brand"),
        ("category", "Category"),
        ("budget_range", "Budget"),
        ("amount", "Bid"),
        ("top_bid", "Top Bid"),
        ("to_lead", "To Lead"),
        ("status", "Status"),
        ("time_left", "Time Left"),
        ("pitch", "Pitch"),
        ("submitted_at", "Submitted"),
    ])
}
