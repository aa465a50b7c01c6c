// SPDX-License-Identifier: MPL-2.0
//! Filter bar shown above the thumbnail grid.
//!
//! This module renders the gallery title and one pill button per category,
//! plus the "All" pill that clears the filter. The selected category is
//! highlighted; pressing any pill emits a message for the parent to apply.

use crate::gallery::{capitalize, CategoryFilter};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the filter bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Gallery title from the manifest, if any.
    pub title: Option<&'a str>,
    /// Categories in first-appearance order.
    pub categories: &'a [String],
    /// Currently applied filter.
    pub filter: &'a CategoryFilter,
}

/// Messages emitted by the filter bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pill was pressed and the given filter should be applied.
    CategorySelected(CategoryFilter),
}

/// Render the filter bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::SM).width(Length::Fill);

    if let Some(title) = ctx.title {
        content = content.push(Text::new(title).size(typography::TITLE_MD));
    }

    content = content.push(build_pill_row(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

/// Build the row of category pills, starting with "All".
fn build_pill_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(build_pill(
            ctx.i18n.tr("filter-all"),
            !ctx.filter.is_active(),
            CategoryFilter::All,
        ));

    for category in ctx.categories {
        let selected = matches!(ctx.filter, CategoryFilter::Only(c) if c == category);
        row = row.push(build_pill(
            capitalize(category),
            selected,
            CategoryFilter::Only(category.clone()),
        ));
    }

    row.wrap().into()
}

/// Build a single filter pill.
fn build_pill<'a>(label: String, selected: bool, filter: CategoryFilter) -> Element<'a, Message> {
    let pill = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::CategorySelected(filter));

    if selected {
        pill.style(styles::button::selected).into()
    } else {
        pill.style(styles::button::unselected).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn categories() -> Vec<String> {
        vec!["nature".to_string(), "city".to_string()]
    }

    #[test]
    fn filter_bar_renders_with_all_selected() {
        let i18n = I18n::default();
        let categories = categories();
        let ctx = ViewContext {
            i18n: &i18n,
            title: Some("Sample Gallery"),
            categories: &categories,
            filter: &CategoryFilter::All,
        };
        let _element = view(ctx);
    }

    #[test]
    fn filter_bar_renders_with_category_selected() {
        let i18n = I18n::default();
        let categories = categories();
        let filter = CategoryFilter::Only("city".to_string());
        let ctx = ViewContext {
            i18n: &i18n,
            title: None,
            categories: &categories,
            filter: &filter,
        };
        let _element = view(ctx);
    }

    #[test]
    fn filter_bar_renders_without_categories() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            title: None,
            categories: &[],
            filter: &CategoryFilter::All,
        };
        let _element = view(ctx);
    }
}
