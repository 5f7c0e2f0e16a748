//! Layout composer for grid mode
//!
//! Turns the visible subset into a [`RenderPlan`]: every record with its grid
//! [`Span`], plus decorative "void" fillers inserted after fixed positions of
//! the visible subset. Positions count post-filter records, so the fillers
//! move with the filter. Table mode never goes through here.

use serde::Serialize;

use formvoid_core::{ContentRecord, Shape};

/// Grid footprint of a plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    /// 1 column x 1 row
    Unit,
    /// 1 column x 2 rows
    Tall,
    /// 2 columns x 1 row
    Wide,
}

impl Span {
    pub fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Square => Span::Unit,
            Shape::Portrait => Span::Tall,
            Shape::Landscape => Span::Wide,
        }
    }

    pub fn columns(&self) -> u16 {
        match self {
            Span::Unit | Span::Tall => 1,
            Span::Wide => 2,
        }
    }

    pub fn rows(&self) -> u16 {
        match self {
            Span::Unit | Span::Wide => 1,
            Span::Tall => 2,
        }
    }
}

/// Text placement inside a filler cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Center,
    BottomLeft,
}

/// A decorative cell definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Filler {
    pub id: &'static str,
    pub span: Span,
    pub alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_text: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<&'static str>,
}

/// A filler and the visible-subset index it follows
#[derive(Debug, Clone, Copy)]
pub struct FillerSlot {
    pub after_index: usize,
    pub filler: Filler,
}

/// Fillers in insertion order. Each is emitted at most once.
pub const FILLER_SLOTS: [FillerSlot; 3] = [
    FillerSlot {
        after_index: 1,
        filler: Filler {
            id: "void-1",
            span: Span::Unit,
            alignment: Alignment::Center,
            primary_text: Some("\"Form follows Context.\""),
            secondary_text: Some("DESIGN PRINCIPLE 01"),
        },
    },
    FillerSlot {
        after_index: 3,
        filler: Filler {
            id: "void-2",
            span: Span::Wide,
            alignment: Alignment::Center,
            primary_text: Some("The Quiet Archive"),
            secondary_text: Some("COLLECTING SILENCE"),
        },
    },
    FillerSlot {
        after_index: 5,
        filler: Filler {
            id: "void-3",
            span: Span::Unit,
            alignment: Alignment::BottomLeft,
            primary_text: Some("02:00 AM"),
            secondary_text: Some("SEOUL / STUDIO"),
        },
    },
];

/// One positioned element of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanEntry<'a> {
    Content {
        record: &'a ContentRecord,
        span: Span,
    },
    Filler(Filler),
}

impl PlanEntry<'_> {
    pub fn span(&self) -> Span {
        match self {
            PlanEntry::Content { span, .. } => *span,
            PlanEntry::Filler(filler) => filler.span,
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, PlanEntry::Filler(_))
    }
}

/// Ordered grid plan for one visible subset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderPlan<'a> {
    entries: Vec<PlanEntry<'a>>,
}

impl<'a> RenderPlan<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry<'a>> {
        self.entries.iter()
    }

    pub fn filler_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_filler()).count()
    }

    /// Position of a record's entry within the plan
    pub fn position_of(&self, record_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| matches!(e, PlanEntry::Content { record, .. } if record.id == record_id))
    }
}

/// Compose the grid plan for `visible`
pub fn compose<'a>(visible: &[&'a ContentRecord]) -> RenderPlan<'a> {
    let mut entries = Vec::with_capacity(visible.len() + FILLER_SLOTS.len());
    let mut slots = FILLER_SLOTS.iter().peekable();

    for (index, record) in visible.iter().copied().enumerate() {
        entries.push(PlanEntry::Content {
            record,
            span: Span::for_shape(record.shape),
        });

        while let Some(slot) = slots.next_if(|slot| slot.after_index == index) {
            entries.push(PlanEntry::Filler(slot.filler));
        }
    }

    RenderPlan { entries }
}
