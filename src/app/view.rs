// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The photo card is drawn from a [`GestureState`] snapshot; the view never
//! changes gesture state itself.

use super::Message;
use crate::application::session::ReviewSession;
use crate::application::swipe;
use crate::domain::asset::SampledAsset;
use crate::domain::error::ReviewError;
use crate::domain::gesture::{GestureState, SwipeOutcome};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, image, mouse_area, Column, Container, Row, Space, Stack, Text,
};
use iced::{Color, ContentFit, Element, Length, Padding, Radians, Rotation};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub has_library: bool,
    pub session: &'a ReviewSession,
    pub gesture: GestureState,
    pub pressed: Option<SwipeOutcome>,
    pub theme_mode: ThemeMode,
    pub show_index_label: bool,
    pub fault: Option<&'a ReviewError>,
    pub notice: Option<&'a str>,
}

/// Renders the card screen, or the empty state when nothing is shown.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_mode(ctx.theme_mode);

    let body = match ctx.session.current() {
        Some(sampled) => view_review(&ctx, sampled, &colors),
        None => view_empty(&ctx, &colors),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

fn view_review<'a>(
    ctx: &ViewContext<'a>,
    sampled: &'a SampledAsset,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let mut header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(pill(counters(ctx), colors))
        .push(Space::new().width(Length::Fill));
    if ctx.show_index_label {
        header = header.push(pill(sampled.position_label(), colors));
    }

    let actions = Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .push(action_button(
            ctx.i18n.tr("action-delete"),
            "✕",
            colors.delete,
            SwipeOutcome::Delete,
            ctx.pressed == Some(SwipeOutcome::Delete),
        ))
        .push(action_button(
            ctx.i18n.tr("action-keep"),
            "✓",
            colors.keep,
            SwipeOutcome::Keep,
            ctx.pressed == Some(SwipeOutcome::Keep),
        ));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .push(header)
        .push(card(ctx, sampled, colors))
        .push(actions);

    if let Some(line) = status_line(ctx) {
        content = content.push(
            Text::new(line)
                .size(typography::CAPTION)
                .color(colors.error),
        );
    }

    content.into()
}

/// The photo with its feedback stamps, offset by the drag.
fn card<'a>(
    ctx: &ViewContext<'a>,
    sampled: &'a SampledAsset,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let gesture = ctx.gesture;

    let photo: Element<'a, Message> = match sampled.asset.file_path() {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .rotation(Rotation::Floating(Radians(gesture.rotation)))
            .opacity(gesture.image_opacity)
            .into(),
        None => Container::new(
            Text::new(sampled.asset.display_name())
                .size(typography::BODY)
                .color(Color {
                    a: gesture.image_opacity,
                    ..colors.overlay_text
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let keep_stamp = Container::new(stamp(
        ctx.i18n.tr("stamp-keep"),
        colors.keep,
        gesture.keep_opacity,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Top);

    let delete_stamp = Container::new(stamp(
        ctx.i18n.tr("stamp-delete"),
        colors.delete,
        gesture.nope_opacity,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Top);

    let card = Container::new(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(photo)
            .push(keep_stamp)
            .push(delete_stamp),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .height(Length::Fixed(sizing::CARD_HEIGHT));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(offset_padding(gesture.translate_x, gesture.translate_y))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Padding that moves centered content by `(dx, dy)`.
fn offset_padding(dx: f32, dy: f32) -> Padding {
    Padding {
        top: (2.0 * dy).max(0.0),
        right: (-2.0 * dx).max(0.0),
        bottom: (-2.0 * dy).max(0.0),
        left: (2.0 * dx).max(0.0),
    }
}

fn stamp<'a>(label: String, color: Color, alpha: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::STAMP))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::stamp(color, alpha))
        .into()
}

/// Round button that highlights while held; commits on release over it.
fn action_button<'a>(
    label: String,
    glyph: &'a str,
    color: Color,
    outcome: SwipeOutcome,
    pressed: bool,
) -> Element<'a, Message> {
    let face = Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .push(Text::new(glyph).size(typography::ICON))
            .push(Text::new(label).size(typography::CAPTION)),
    )
    .width(Length::Fixed(sizing::ACTION_BUTTON))
    .height(Length::Fixed(sizing::ACTION_BUTTON))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::action_button(color, pressed));

    mouse_area(face)
        .on_press(Message::Swipe(swipe::Message::ButtonPressed(outcome)))
        .on_release(Message::Swipe(swipe::Message::ButtonReleased(outcome)))
        .on_exit(Message::Swipe(swipe::Message::ButtonCancelled))
        .into()
}

fn pill<'a>(label: String, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::pill(
            colors.overlay_background,
            colors.overlay_text,
        ))
        .into()
}

fn counters(ctx: &ViewContext<'_>) -> String {
    ctx.i18n.tr_with_args(
        "status-counters",
        &[
            ("kept", FluentValue::from(ctx.session.kept())),
            ("deleted", FluentValue::from(ctx.session.deleted())),
        ],
    )
}

/// Error or warning worth showing under the buttons, most recent cause first.
fn status_line(ctx: &ViewContext<'_>) -> Option<String> {
    if let Some(fault) = ctx.fault {
        return Some(ctx.i18n.tr(fault.i18n_key()));
    }
    if let Some(err) = ctx.session.last_error() {
        return Some(ctx.i18n.tr(err.i18n_key()));
    }
    if let Some(key) = ctx.notice {
        return Some(ctx.i18n.tr(key));
    }
    if !ctx.session.real_delete() {
        return Some(ctx.i18n.tr("status-delete-off"));
    }
    None
}

/// Retrying only helps when the last failure was transient.
fn offers_retry(ctx: &ViewContext<'_>) -> bool {
    ctx.has_library
        && !ctx
            .session
            .last_error()
            .is_some_and(ReviewError::needs_user_action)
}

fn view_empty<'a>(ctx: &ViewContext<'a>, colors: &ColorScheme) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fixed(sizing::EMPTY_STATE_WIDTH));

    if ctx.has_library && ctx.session.is_busy() {
        content = content.push(
            Text::new(ctx.i18n.tr("status-loading"))
                .size(typography::BODY)
                .color(colors.overlay_text),
        );
    } else {
        let detail_key = if !ctx.has_library {
            "empty-no-library"
        } else {
            match ctx.session.last_error() {
                Some(ReviewError::EmptyLibrary) | None => "empty-library-empty",
                Some(err) => err.i18n_key(),
            }
        };

        content = content
            .push(
                Text::new(ctx.i18n.tr("empty-title"))
                    .size(typography::TITLE_LG)
                    .color(colors.overlay_text),
            )
            .push(
                Text::new(ctx.i18n.tr(detail_key))
                    .size(typography::BODY)
                    .color(colors.overlay_text),
            );

        let mut buttons = Row::new().spacing(spacing::SM).push(
            button(Text::new(ctx.i18n.tr("empty-choose-folder")))
                .on_press(Message::ChooseFolder)
                .style(styles::button_primary)
                .padding([spacing::XS, spacing::MD]),
        );
        if offers_retry(ctx) {
            buttons = buttons.push(
                button(Text::new(ctx.i18n.tr("empty-retry")))
                    .on_press(Message::Retry)
                    .style(styles::button_primary)
                    .padding([spacing::XS, spacing::MD]),
            );
        }
        content = content.push(buttons);

        if let Some(key) = ctx.notice {
            content = content.push(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(colors.error),
            );
        }
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
