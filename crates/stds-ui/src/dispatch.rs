//! Click routing for the single page-wide listener
//!
//! The document gets one `click` listener. It resolves the nearest button and
//! token display above the event target and hands the result to
//! [`ClickTarget::classify`], which decides which handlers run and in what
//! order. Kept generic over the element type so routing is testable without
//! a DOM.

/// Handler a click is routed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget<E> {
    /// Click landed on (or inside) a button: play the ripple
    Button(E),
    /// Click landed on the token display: copy the token
    TokenDisplay(E),
}

impl<E> ClickTarget<E> {
    /// Route a click given the closest button and token display ancestors.
    ///
    /// Both handlers run when the token display sits inside a button; the
    /// ripple goes first so its overlay is appended before the text changes.
    /// An empty result means the click is ignored.
    #[must_use]
    pub fn classify(button: Option<E>, token_display: Option<E>) -> Vec<Self> {
        button
            .map(Self::Button)
            .into_iter()
            .chain(token_display.map(Self::TokenDisplay))
            .collect()
    }

    #[must_use]
    pub const fn element(&self) -> &E {
        match self {
            Self::Button(el) | Self::TokenDisplay(el) => el,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_matches_when_classified_then_ignored() {
        let routes = ClickTarget::<&str>::classify(None, None);
        assert!(routes.is_empty());
    }

    #[test]
    fn given_button_ancestor_when_classified_then_routed_to_ripple() {
        let routes = ClickTarget::classify(Some("btn"), None);
        assert_eq!(routes, vec![ClickTarget::Button("btn")]);
    }

    #[test]
    fn given_token_display_when_classified_then_routed_to_copy() {
        let routes = ClickTarget::classify(None, Some("token"));
        assert_eq!(routes, vec![ClickTarget::TokenDisplay("token")]);
    }

    #[test]
    fn given_token_inside_button_when_classified_then_ripple_runs_first() {
        let routes = ClickTarget::classify(Some("btn"), Some("token"));
        assert_eq!(
            routes,
            vec![ClickTarget::Button("btn"), ClickTarget::TokenDisplay("token")]
        );
        assert_eq!(routes.first().map(ClickTarget::element), Some(&"btn"));
    }
}
