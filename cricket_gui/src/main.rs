//! # Cricket Catalog GUI Application
//!
//! Desktop form for cataloguing crickets, built with Iced.
//!
//! Layout:
//! - Left: entry panel (identity, level/size, eight attribute rows, actions, cover image)
//! - Right: one tab per size class listing records with edit/reorder/delete controls
//! - Bottom: status bar
//!
//! Every action runs synchronously against the catalog file and then reloads
//! the whole list.

mod ui;

use iced::widget::image;
use iced::widget::{column, container, row};
use iced::{Element, Length, Size, Task, Theme};
use tracing::{error, info};

use cricket_core::category::Category;
use cricket_core::config::CatalogConfig;
use cricket_core::display::{render_groups, SizeGroups};
use cricket_core::errors::CatalogError;
use cricket_core::form::{save_form, FormState, SaveOutcome};
use cricket_core::logging::{init_logging, Verbosity};
use cricket_core::record::{level_options, Attribute, Cricket, SizeClass};
use cricket_core::store::{self, Direction};

const WINDOW_TITLE: &str = "蟋蟀管理界面";

pub fn main() -> iced::Result {
    init_logging(Verbosity::Normal);

    let config = CatalogConfig::default();
    info!(data_file = %config.data_file.display(), "starting cricket catalog");

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(1350.0, 700.0))
        .run()
}

/// Application state
pub struct App {
    config: CatalogConfig,
    /// Entry form bound to the left panel
    pub form: FormState,
    /// Records grouped for the tabs, rebuilt on every refresh
    pub groups: SizeGroups,
    pub selected_tab: SizeClass,
    pub level_options: Vec<String>,
    pub cover: Option<image::Handle>,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Entry panel
    NameChanged(String),
    BreedChanged(String),
    LevelSelected(String),
    SizeSelected(SizeClass),
    CategorySelected(Attribute, Category),
    ValueSelected(Attribute, String),
    SaveCricket,
    ShowRecords,

    // Records panel
    TabSelected(SizeClass),
    EditCricket(Cricket),
    MoveCricket(String, Direction),
    DeleteCricket(String),
}

impl App {
    fn new(config: CatalogConfig) -> Self {
        let cover = config
            .cover_image
            .exists()
            .then(|| image::Handle::from_path(&config.cover_image));

        let mut app = App {
            config,
            form: FormState::new(),
            groups: SizeGroups::default(),
            selected_tab: SizeClass::Small,
            level_options: level_options(),
            cover,
            status: "Ready".to_string(),
            error_message: None,
        };
        app.refresh();
        app
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn data_file(&self) -> &std::path::Path {
        &self.config.data_file
    }

    /// Reload the catalog file and rebuild every tab.
    ///
    /// A load error replaces the current message; a successful load leaves
    /// any error from the preceding action in place.
    fn refresh(&mut self) {
        match store::load_crickets(&self.config.data_file) {
            Ok(crickets) => self.groups = render_groups(&crickets),
            Err(e) => {
                error!(error = %e, "failed to load catalog");
                self.groups = SizeGroups::default();
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn report(&mut self, action: &str, e: CatalogError) {
        error!(error = %e, action, "catalog write failed");
        self.status = format!("{} failed", action);
        self.error_message = Some(e.to_string());
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => self.form.name = value,
            Message::BreedChanged(value) => self.form.breed = value,
            Message::LevelSelected(value) => self.form.level = value,
            Message::SizeSelected(size) => self.form.size = size.label().to_string(),
            Message::CategorySelected(attribute, category) => {
                self.form.select_category(attribute, category);
            }
            Message::ValueSelected(attribute, value) => {
                self.form.select_value(attribute, value);
            }
            Message::SaveCricket => {
                self.error_message = None;
                match save_form(&mut self.form, &self.config.data_file) {
                    Ok(outcome) => {
                        self.status = match outcome {
                            SaveOutcome::Added { name } => format!("Added '{}'", name),
                            SaveOutcome::Updated { name, .. } => format!("Updated '{}'", name),
                            SaveOutcome::Missing { original_name } => {
                                format!("'{}' is no longer in the catalog", original_name)
                            }
                        };
                    }
                    Err(e) => self.report("Save", e),
                }
                self.refresh();
            }
            Message::ShowRecords => {
                self.error_message = None;
                self.refresh();
                self.status = format!("{} records", self.groups.total());
            }
            Message::TabSelected(size) => self.selected_tab = size,
            Message::EditCricket(cricket) => {
                self.status = format!("Editing '{}'", cricket.name);
                self.form.begin_edit(&cricket);
            }
            Message::MoveCricket(name, direction) => {
                self.error_message = None;
                if let Err(e) = store::move_cricket(&self.config.data_file, &name, direction) {
                    self.report("Move", e);
                }
                self.refresh();
            }
            Message::DeleteCricket(name) => {
                self.error_message = None;
                match store::remove_cricket(&self.config.data_file, &name) {
                    Ok(removed) if removed > 0 => self.status = format!("Deleted '{}'", name),
                    Ok(_) => {}
                    Err(e) => self.report("Delete", e),
                }
                self.refresh();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let main_content = row![
            ui::entry_panel::view_entry_panel(self),
            ui::records_panel::view_records_panel(self),
        ]
        .spacing(10)
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(
            self.data_file(),
            self.form.is_editing(),
            self.error_message.as_deref(),
            &self.status,
        );

        container(column![main_content, status_bar])
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
