use std::future::Future;

use iced::widget::{Column, Container, Text};
use iced::{Application, Color, Command, Element, Font, Length, Theme};
use log::info;
use crate::client::config::ClientConfig;
use crate::client::controller::user_list::UserListController;
use crate::client::gui::error_boundary::ErrorBoundary;
use crate::client::gui::router::Route;
use crate::client::gui::views::user_list;
use crate::client::models::collection_state::UserAction;
use crate::client::models::form_state::{FormIntent, UserFormState};
use crate::client::models::messages::Message;
use crate::client::services::users_service::UsersService;

const APP_TITLE: &str = "User Management";
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub struct UserManagementApp {
    pub route: Option<Route>,
    pub controller: UserListController,
    pub form: UserFormState,
    boundary: ErrorBoundary,
}

impl Application for UserManagementApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        let service = UsersService::new(config.api_base_url);
        let (controller, initial_load) = UserListController::init(service);
        let app = UserManagementApp {
            route: Route::resolve("/"),
            controller,
            form: UserFormState::new(),
            boundary: ErrorBoundary::new(),
        };
        info!("[APP] mounted at {}", Route::UserList.path());
        (app, Command::perform(initial_load, Message::UserActionCompleted))
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::FormInputChanged { name, value } => {
                self.form.named_field_changed(name, value);
                Command::none()
            }
            Message::SubmitForm => match self.submit_form() {
                Some(update) => Command::perform(update, Message::UserActionCompleted),
                None => Command::none(),
            },
            Message::EditUser(user) => {
                self.form.set_edit_target(&user);
                self.controller.edit(user);
                Command::none()
            }
            Message::DeleteUser(id) => {
                Command::perform(self.controller.delete_task(id), Message::UserActionCompleted)
            }
            Message::UserActionCompleted(action) => {
                self.controller.apply(action);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        self.boundary.guard(|| self.frame(), fallback_view)
    }
}

impl UserManagementApp {
    /// Submits the form if every field is filled. A new record is appended
    /// right away; an edited one yields the pending PUT, whose result must be
    /// fed back as [`Message::UserActionCompleted`].
    pub fn submit_form(&mut self) -> Option<impl Future<Output = UserAction> + Send + 'static> {
        if !self.form.is_complete() {
            return None;
        }
        match self.form.submit() {
            FormIntent::Create(user) => {
                self.controller.create(user);
                None
            }
            FormIntent::Update(user) => Some(self.controller.update_task(user)),
        }
    }

    fn frame(&self) -> Element<Message> {
        let page: Element<Message> = match self.route {
            Some(Route::UserList) => user_list::view(self.controller.state(), &self.form),
            None => Column::new().into(),
        };

        Container::new(
            Column::new()
                .spacing(24)
                .padding(32)
                .max_width(720.0)
                .push(Text::new(APP_TITLE).font(BOLD_FONT).size(32))
                .push(page),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
    }
}

fn fallback_view<'a>() -> Element<'a, Message> {
    Container::new(Text::new("Something went wrong.").font(BOLD_FONT).size(24))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}
