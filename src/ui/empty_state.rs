// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no gallery is open.
//!
//! This component provides a welcoming UI with:
//! - A message explaining the empty state
//! - A button to pick a gallery folder via system dialog
//! - Visual indication that a folder can be dropped on the window

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Messages emitted by the empty state.
#[derive(Debug, Clone)]
pub enum Message {
    /// The open button was pressed; the parent shows the folder picker.
    OpenPickerPressed,
}

/// Renders the empty state view.
///
/// This view is displayed when the application starts without a gallery
/// argument or when the last open attempt failed. `load_error` carries the
/// failure details of that attempt, if any.
pub fn view<'a>(i18n: &I18n, load_error: Option<&'a str>) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenPickerPressed);

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let mut content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::EMPTY_STATE_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    if let Some(details) = load_error {
        let failure = Text::new(i18n.tr_with_args("gallery-load-failed", &[("details", details)]))
            .size(typography::BODY_SM)
            .color(palette::ERROR_500);
        content = content.push(failure);
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n, None);
    }

    #[test]
    fn empty_state_renders_with_load_error() {
        let i18n = I18n::default();
        let _element = view(&i18n, Some("gallery.toml not found"));
    }
}
