use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Color, Element, Length};
use crate::client::gui::views::user_form;
use crate::client::gui::widgets::alert;
use crate::client::models::collection_state::CollectionState;
use crate::client::models::form_state::UserFormState;
use crate::client::models::messages::Message;
use crate::client::models::user::UserRecord;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

fn user_item_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.2, 0.2, 0.3),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 6.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

fn user_item(user: &UserRecord) -> Element<'_, Message> {
    let edit_button = Button::new(Text::new("Edit").size(14))
        .on_press(Message::EditUser(user.clone()))
        .style(iced::theme::Button::Secondary)
        .padding([8, 12]);

    let delete_button = Button::new(Text::new("Delete").size(14))
        .on_press(Message::DeleteUser(user.id.clone()))
        .style(iced::theme::Button::Destructive)
        .padding([8, 12]);

    Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new(user.display_label()).size(16).width(Length::Fill))
            .push(edit_button)
            .push(delete_button),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(user_item_appearance)))
    .into()
}

pub fn view<'a>(state: &'a CollectionState, form: &'a UserFormState) -> Element<'a, Message> {
    let error_bar: Element<Message> = match state.error() {
        Some(error) => alert::view(error),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let mut items = Column::new().spacing(8);
    if state.users().is_empty() {
        items = items.push(Text::new("No users").size(14).style(TEXT_SECONDARY));
    }
    for user in state.users() {
        items = items.push(user_item(user));
    }

    Column::new()
        .spacing(16)
        .width(Length::Fill)
        .push(error_bar)
        .push(user_form::view(form))
        .push(Scrollable::new(items).height(Length::Fill))
        .into()
}
