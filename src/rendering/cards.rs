use crate::constants::*;
use crate::handlers::Message;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Length, Shadow, Vector};
use cosmic::iced_widget::{column, horizontal_space, row, vertical_space};
use cosmic::widget::{button, container, icon, text};
use portal_notifications_util::{CardView, Position, StackView, Variant};

fn to_iced(color: portal_notifications_util::Color) -> cosmic::iced::Color {
    cosmic::iced::Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Container style of one card: fill and border follow the variant, the
/// shadow grows with elevation.
fn card_style(card: &CardView) -> cosmic::theme::Container<'static> {
    let background = card.background.map(to_iced);
    let border_color = card.border.map(to_iced);
    let filled = card.variant == Variant::Filled;
    let elevation = f32::from(card.elevation);

    cosmic::theme::Container::custom(move |_theme| {
        cosmic::iced_widget::container::Style {
            text_color: filled.then_some(cosmic::iced::Color::WHITE),
            background: background.map(Background::Color),
            border: Border {
                color: border_color.unwrap_or(cosmic::iced::Color::TRANSPARENT),
                width: if border_color.is_some() { CARD_BORDER_WIDTH } else { 0.0 },
                radius: CARD_RADIUS.into(),
            },
            shadow: Shadow {
                color: cosmic::iced::Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, elevation * SHADOW_OFFSET_PER_LEVEL),
                blur_radius: elevation * SHADOW_BLUR_PER_LEVEL,
            },
            ..Default::default()
        }
    })
}

/// Render one notification card
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │ [Icon] Title                  2m [X] │
/// │        Message                       │
/// │        Description                   │
/// │                            [Action]  │
/// └──────────────────────────────────────┘
/// ```
pub fn card(card: &CardView) -> Element<'static, Message> {
    let mut text_column = cosmic::iced_widget::Column::new().spacing(2).width(Length::Fill);
    if let Some(title) = &card.title {
        text_column = text_column.push(text::heading(title.clone()));
    }
    text_column = text_column.push(text::body(card.message.clone()));
    if let Some(description) = &card.description {
        text_column = text_column.push(text::caption(description.clone()));
    }

    let mut header = cosmic::iced_widget::Row::new()
        .spacing(8)
        .align_y(Alignment::Start);

    if let Some(name) = card.icon {
        header = header.push(icon::from_name(name).size(ICON_SIZE).symbolic(true));
    }
    header = header.push(text_column);

    if let Some(age) = card.age_caption() {
        header = header.push(text::caption(age));
    }

    // Persistent notifications never get a dismiss control
    if card.dismissible {
        let close_button = button::custom(
            icon::from_name("window-close-symbolic")
                .size(ICON_SIZE_SMALL)
                .symbolic(true),
        )
        .on_press(Message::Dismissed(card.id))
        .class(cosmic::theme::Button::Text);
        header = header.push(close_button);
    }

    let mut content = column![header].spacing(8);

    if let Some(action) = &card.action {
        let action_button = button::text(action.label.clone())
            .on_press(Message::ActionClicked(card.id))
            .padding([6, 12]);
        content = content.push(
            row![horizontal_space(), action_button].align_y(Alignment::Center),
        );
    }

    container(content)
        .padding(CARD_PADDING)
        .width(Length::Fixed(CARD_WIDTH))
        .class(card_style(card))
        .into()
}

/// Render one anchored stack, oldest card nearest its anchor edge
pub fn stack(stack: &StackView) -> Element<'static, Message> {
    let cards: cosmic::iced_widget::Column<'static, Message, cosmic::Theme, cosmic::Renderer> = stack
        .cards_top_to_bottom()
        .map(card)
        .fold(
            cosmic::iced_widget::Column::new().spacing(STACK_SPACING),
            |col, elem| col.push(elem),
        );
    cards.into()
}

fn horizontal_alignment(position: Position) -> Alignment {
    match position.column() {
        0 => Alignment::Start,
        1 => Alignment::Center,
        _ => Alignment::End,
    }
}

/// One grid cell: the stack anchored at `position`, or empty space
fn slot(stacks: &[StackView], position: Position) -> Element<'static, Message> {
    let content: Element<'static, Message> = match stacks.iter().find(|s| s.position == position) {
        Some(s) => stack(s),
        None => cosmic::widget::Space::new(0, 0).into(),
    };

    container(content)
        .width(Length::Fill)
        .align_x(horizontal_alignment(position))
        .into()
}

/// Lay the stacks out on a 2x3 grid covering the whole surface
pub fn surface(stacks: &[StackView]) -> Element<'static, Message> {
    let [top_left, top_center, top_right, bottom_left, bottom_center, bottom_right] =
        Position::ALL.map(|position| slot(stacks, position));

    let top_row = row![top_left, top_center, top_right]
        .spacing(STACK_SPACING)
        .align_y(Alignment::Start);
    let bottom_row = row![bottom_left, bottom_center, bottom_right]
        .spacing(STACK_SPACING)
        .align_y(Alignment::End);

    container(column![top_row, vertical_space(), bottom_row])
        .padding(SURFACE_MARGIN)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
