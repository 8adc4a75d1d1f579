// Barra di errore mostrata sopra il form
use iced::widget::{Container, Text};
use iced::{Color, Element, Length};
use crate::client::models::messages::Message;

const ERROR_BG: Color = Color::from_rgb(1.0, 0.2, 0.2);

fn alert_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ERROR_BG)),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(Text::new(msg).size(16).style(Color::WHITE))
        .padding([12, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(alert_appearance)))
        .into()
}
