//! Hover tooltip state for the stacked chart.
//!
//! Modeled as an explicit two-state machine so the ordering guarantees
//! (last-enter-wins, leave always hides) are testable without a UI harness.
//! The component keeps one of these in a signal and feeds it pointer events.

/// Pixel gap between the pointer and the panel so it never sits under the
/// cursor.
pub const TOOLTIP_OFFSET_PX: f64 = 14.0;

/// What the floating panel shows for one hovered bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
    /// The hovered record's name.
    pub title: String,
    /// One row per series key: display label and literal value.
    pub rows: Vec<(String, f64)>,
    /// The record's total over the key set.
    pub total: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible {
        content: TooltipContent,
        x: f64,
        y: f64,
    },
}

impl TooltipState {
    /// Show the panel for a bar. Entering while already visible replaces
    /// content and position in place, so rapid enters never flash stale data.
    pub fn enter(&mut self, content: TooltipContent, x: f64, y: f64) {
        *self = TooltipState::Visible { content, x, y };
    }

    /// Track the pointer without touching content. No-op while hidden: a
    /// stray move arriving after leave must not resurrect the panel.
    pub fn move_to(&mut self, new_x: f64, new_y: f64) {
        if let TooltipState::Visible { x, y, .. } = self {
            *x = new_x;
            *y = new_y;
        }
    }

    /// Hide the panel, regardless of which bar most recently fired enter.
    pub fn leave(&mut self) {
        *self = TooltipState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feb_content() -> TooltipContent {
        TooltipContent {
            title: "Feb".to_string(),
            rows: vec![
                ("Cita".to_string(), 5.0),
                ("Cotizacion".to_string(), 0.0),
                ("Consulta".to_string(), 5.0),
            ],
            total: 10.0,
        }
    }

    fn jan_content() -> TooltipContent {
        TooltipContent {
            title: "Jan".to_string(),
            rows: vec![
                ("Cita".to_string(), 2.0),
                ("Cotizacion".to_string(), 3.0),
                ("Consulta".to_string(), 0.0),
            ],
            total: 5.0,
        }
    }

    #[test]
    fn test_enter_shows_and_leave_hides() {
        let mut state = TooltipState::default();
        assert!(!state.is_visible());

        state.enter(feb_content(), 120.0, 80.0);
        assert_eq!(
            state,
            TooltipState::Visible {
                content: feb_content(),
                x: 120.0,
                y: 80.0,
            }
        );

        state.leave();
        assert_eq!(state, TooltipState::Hidden);
    }

    #[test]
    fn test_last_enter_wins_and_leave_still_hides() {
        let mut state = TooltipState::default();
        state.enter(jan_content(), 40.0, 60.0);
        state.enter(feb_content(), 150.0, 62.0);

        match &state {
            TooltipState::Visible { content, .. } => assert_eq!(content.title, "Feb"),
            TooltipState::Hidden => panic!("tooltip should be visible"),
        }

        state.leave();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_move_tracks_position_and_keeps_content() {
        let mut state = TooltipState::default();
        state.enter(jan_content(), 10.0, 20.0);
        state.move_to(33.0, 44.0);

        assert_eq!(
            state,
            TooltipState::Visible {
                content: jan_content(),
                x: 33.0,
                y: 44.0,
            }
        );
    }

    #[test]
    fn test_move_while_hidden_stays_hidden() {
        let mut state = TooltipState::default();
        state.move_to(33.0, 44.0);
        assert_eq!(state, TooltipState::Hidden);

        state.enter(jan_content(), 1.0, 2.0);
        state.leave();
        state.move_to(5.0, 6.0);
        assert_eq!(state, TooltipState::Hidden);
    }
}
