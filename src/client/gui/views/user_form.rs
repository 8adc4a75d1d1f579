use iced::widget::{Button, Column, Container, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};
use crate::client::models::form_state::{FormField, UserFormState};
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

fn input<'a>(form: &'a UserFormState, field: FormField, placeholder: &str, enabled: bool) -> Element<'a, Message> {
    let mut text_input = TextInput::new(placeholder, form.value(field))
        .padding(12)
        .size(14)
        .width(Length::Fill);
    // Senza on_input il campo resta disabilitato
    if enabled {
        text_input = text_input.on_input(move |value| Message::FormInputChanged { name: field.name(), value });
        if form.is_complete() {
            text_input = text_input.on_submit(Message::SubmitForm);
        }
    }
    Container::new(text_input)
        .style(iced::theme::Container::Custom(Box::new(input_appearance)))
        .into()
}

pub fn view(form: &UserFormState) -> Element<'_, Message> {
    // L'ID non si modifica durante l'edit
    let id_input = input(form, FormField::Id, "ID", !form.is_editing);
    let name_input = input(form, FormField::Name, "Name", true);
    let email_input = input(form, FormField::Email, "Email", true);

    let mut submit = Button::new(
        Container::new(Text::new(form.submit_label()).font(BOLD_FONT).size(16))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .width(Length::Fill)
    .padding(12);
    if form.is_complete() {
        submit = submit.on_press(Message::SubmitForm);
    }

    Container::new(
        Column::new()
            .spacing(12)
            .padding(24)
            .align_items(Alignment::Center)
            .push(id_input)
            .push(name_input)
            .push(email_input)
            .push(submit),
    )
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}
