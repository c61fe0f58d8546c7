// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dark backdrop behind the photo card.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Round keep/delete button; filled with `color` while held down.
pub fn action_button(color: Color, pressed: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, text_color) = if pressed {
            (color, palette::WHITE)
        } else {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..color
                },
                color,
            )
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                color,
                width: 2.0,
                radius: radius::FULL.into(),
            },
            shadow: if pressed { shadow::MD } else { shadow::SM },
            ..Default::default()
        }
    }
}

/// Outlined "KEEP"/"DELETE" stamp drawn over the photo at `alpha`.
pub fn stamp(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(Color { a: alpha, ..color }),
        border: Border {
            color: Color { a: alpha, ..color },
            width: 4.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Translucent pill for the status line and index label.
pub fn pill(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
