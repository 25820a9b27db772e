//! Status board cards: what each service request looks like on the page.

use crate::models::{RequestStatus, ServiceRequest};

const DETAILS_PREVIEW_CHARS: usize = 50;
const LOCATION_PLACEHOLDER: &str = "Location not specified";

/// Visual state of a status badge. Labels outside the known set render
/// with the neutral `Unknown` style instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Pending,
    InProgress,
    Completed,
    Unknown,
}

impl StatusBadge {
    pub fn from_label(label: &str) -> Self {
        match label.parse::<RequestStatus>() {
            Ok(RequestStatus::Pending) => StatusBadge::Pending,
            Ok(RequestStatus::InProgress) => StatusBadge::InProgress,
            Ok(RequestStatus::Completed) => StatusBadge::Completed,
            Err(_) => StatusBadge::Unknown,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadge::Pending => "badge badge-pending",
            StatusBadge::InProgress => "badge badge-in-progress",
            StatusBadge::Completed => "badge badge-completed",
            StatusBadge::Unknown => "badge badge-unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusBadge::Pending | StatusBadge::Unknown => "\u{25F7}",
            StatusBadge::InProgress => "\u{25D1}",
            StatusBadge::Completed => "\u{2714}",
        }
    }
}

pub struct BoardCard {
    pub id: String,
    pub status: String,
    pub badge_class: &'static str,
    pub badge_icon: &'static str,
    pub details_preview: String,
    pub location: String,
    pub created_on: String,
    pub progress: i32,
}

impl From<&ServiceRequest> for BoardCard {
    fn from(req: &ServiceRequest) -> Self {
        // Cards are styled from the label the board displays.
        let status = req.status.to_string();
        let badge = StatusBadge::from_label(&status);
        BoardCard {
            id: req.id.to_string(),
            status,
            badge_class: badge.css_class(),
            badge_icon: badge.icon(),
            details_preview: preview(&req.details),
            location: req
                .location
                .clone()
                .unwrap_or_else(|| LOCATION_PLACEHOLDER.to_string()),
            created_on: req.created_at.format("%Y-%m-%d").to_string(),
            progress: bar_width(req.progress),
        }
    }
}

/// First 50 characters, with an ellipsis when anything was cut.
pub fn preview(details: &str) -> String {
    let mut chars = details.chars();
    let head: String = chars.by_ref().take(DETAILS_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn bar_width(progress: i32) -> i32 {
    progress.clamp(0, 100)
}
