//! Editor toolbar.
//!
//! Formatting commands only; media enters the content through the
//! upload flow, never through the toolbar directly.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

/// A formatting action requested from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Bold,
    Italic,
    Underline,
    Heading,
    Link,
}

impl ToolbarAction {
    /// Title shown on the toolbar button.
    fn title(self) -> &'static str {
        match self {
            Self::Bold => "Negrito (Ctrl+B)",
            Self::Italic => "Itálico (Ctrl+I)",
            Self::Underline => "Sublinhado",
            Self::Heading => "Título",
            Self::Link => "Link",
        }
    }

    fn icon(self) -> icondata::Icon {
        match self {
            Self::Bold => ic::BOLD,
            Self::Italic => ic::ITALIC,
            Self::Underline => ic::UNDERLINE,
            Self::Heading => ic::HEADING,
            Self::Link => ic::LINK,
        }
    }
}

const ACTIONS: &[ToolbarAction] = &[
    ToolbarAction::Bold,
    ToolbarAction::Italic,
    ToolbarAction::Underline,
    ToolbarAction::Heading,
    ToolbarAction::Link,
];

/// Formatting toolbar rendered above the editable surface.
#[component]
pub fn Toolbar(on_action: Callback<ToolbarAction>, children: Children) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; gap: 8px; padding: 12px; border-bottom: 1px solid #e5e7eb; background: #f9fafb; flex-wrap: wrap;">
            {ACTIONS
                .iter()
                .map(|&action| {
                    view! {
                        <button
                            type="button"
                            title=action.title()
                            style="height: 32px; padding: 0 8px; border: 1px solid #e5e7eb; border-radius: 4px; background: white; cursor: pointer;"
                            on:click=move |_| on_action.run(action)
                        >
                            <Icon icon=action.icon() />
                        </button>
                    }
                })
                .collect_view()}
            <div style="width: 1px; height: 24px; background: #d1d5db; margin: 0 4px;" />
            {children()}
        </div>
    }
}
