// SPDX-License-Identifier: MPL-2.0
//! Browsing context a link navigates in.

/// Where activating the link navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    /// Navigate the current browsing context.
    #[default]
    SameContext,
    /// Open a new browsing context that cannot reach its opener.
    NewContext,
}

impl LinkTarget {
    #[must_use]
    pub fn from_new_tab(new_tab: bool) -> Self {
        if new_tab {
            LinkTarget::NewContext
        } else {
            LinkTarget::SameContext
        }
    }

    /// Value of the anchor's `target` attribute, if any.
    #[must_use]
    pub fn target_attr(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewContext => Some("_blank"),
        }
    }

    /// Value of the anchor's `rel` attribute, if any.
    ///
    /// `noopener` severs `window.opener`; `noreferrer` also drops the
    /// Referer header.
    #[must_use]
    pub fn rel_attr(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewContext => Some("noopener noreferrer"),
        }
    }
}
