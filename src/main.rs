use iced::widget::image::Handle;
use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use std::collections::{HashMap, HashSet};
use std::path::Path;

mod config;
mod data;
mod state;
mod ui;

use config::AppConfig;
use data::loader::{self, CsvLoadResult};
use data::photo;
use state::entry::{self, TreeEntry};
use state::filter;
use ui::map::{IconSet, MapView, TileManager};
use ui::popup;

/// Selectable basemap sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLayer {
    Street,
    Satellite,
}

impl BaseLayer {
    pub const ALL: [BaseLayer; 2] = [BaseLayer::Street, BaseLayer::Satellite];
}

impl std::fmt::Display for BaseLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BaseLayer::Street => "Street View",
            BaseLayer::Satellite => "Satellite View",
        })
    }
}

/// Main application state
struct TreeMap {
    config: AppConfig,
    /// All tree entries for the session; rebuilt only by a CSV load
    entries: Vec<TreeEntry>,
    /// Indices of entries currently in the tree layer
    visible: Vec<usize>,
    center: (f64, f64),
    zoom: f64,
    base_layer: BaseLayer,
    street_tiles: TileManager,
    satellite_tiles: TileManager,
    icons: IconSet,
    search_query: String,
    /// Entry whose popup card is open
    selected: Option<usize>,
    /// Popup photos fetched this session, by URL
    photos: HashMap<String, Handle>,
    failed_photos: HashSet<String>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Open CSV" button
    OpenCsv,
    /// Background CSV load completed
    CsvLoaded(Result<CsvLoadResult, String>),
    /// The map widget moved or zoomed the view
    MapMoved { center: (f64, f64), zoom: f64 },
    /// A marker was clicked (None = empty map, closes the popup)
    TreeSelected(Option<usize>),
    SearchChanged(String),
    /// Search collapsed: restore the zoom-driven default view
    ClearSearch,
    BaseLayerPicked(BaseLayer),
    /// Background photo fetch completed
    PhotoLoaded {
        url: String,
        result: Result<Handle, String>,
    },
    CopyLink(String),
}

impl TreeMap {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();

        let street_tiles = TileManager::new("street", config.street_tile_url.clone());
        let satellite_tiles = TileManager::new("satellite", config.satellite_tile_url.clone());
        let icons = IconSet::load(Path::new(&config.icon_dir));

        println!("🌳 Campus Tree Map starting; dataset: {}", config.csv_source);

        // A configured center outside the campus falls back to the middle;
        // the view is then clamped exactly like the map widget clamps it.
        let initial_center = if config
            .campus_bounds
            .contains(config.initial_center.0, config.initial_center.1)
        {
            config.initial_center
        } else {
            config.campus_bounds.center()
        };
        let zoom = config.initial_zoom.clamp(config.min_zoom, config.max_zoom);
        let center = ui::map::clamp_center(
            initial_center,
            zoom,
            (1280.0, 800.0),
            &config.campus_bounds,
        );

        let status = format!("Loading trees from {}...", config.csv_source);
        let load = Task::perform(loader::load_tree_csv(config.csv_source.clone()), |result| {
            Message::CsvLoaded(result.map_err(|e| e.to_string()))
        });

        (
            TreeMap {
                center,
                zoom,
                config,
                entries: Vec::new(),
                visible: Vec::new(),
                base_layer: BaseLayer::Street,
                street_tiles,
                satellite_tiles,
                icons,
                search_query: String::new(),
                selected: None,
                photos: HashMap::new(),
                failed_photos: HashSet::new(),
                status,
            },
            load,
        )
    }

    /// Recompute tree layer membership from the current search query.
    ///
    /// Runs once after data load completes and on every search edit;
    /// the zoom level only picks the representation, not membership.
    fn refresh_visible(&mut self) {
        self.visible = filter::visible_entries(&self.entries, &self.search_query);

        // Drop the popup if its entry was filtered out
        if let Some(index) = self.selected {
            if !self.visible.contains(&index) {
                self.selected = None;
            }
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenCsv => {
                let file = FileDialog::new()
                    .set_title("Select Tree Dataset")
                    .add_filter("CSV", &["csv"])
                    .pick_file();

                if let Some(path) = file {
                    let source = path.display().to_string();
                    self.status = format!("Loading trees from {source}...");
                    return Task::perform(loader::load_tree_csv(source), |result| {
                        Message::CsvLoaded(result.map_err(|e| e.to_string()))
                    });
                }

                Task::none()
            }
            Message::CsvLoaded(Ok(result)) => {
                self.entries = entry::build_entries(&result.records);
                self.selected = None;
                self.refresh_visible();

                self.status = format!(
                    "Ready. {} trees on the map ({} rows skipped).",
                    self.entries.len(),
                    result.skipped
                );
                println!(
                    "🌳 Loaded {} trees ({} rows skipped)",
                    self.entries.len(),
                    result.skipped
                );

                Task::none()
            }
            Message::CsvLoaded(Err(e)) => {
                log::warn!("tree dataset load failed: {e}");
                self.status = format!("Failed to load trees: {e}");
                Task::none()
            }
            Message::MapMoved { center, zoom } => {
                self.center = center;
                self.zoom = zoom;
                Task::none()
            }
            Message::TreeSelected(selection) => {
                self.selected = selection.filter(|&index| index < self.entries.len());

                if let Some(index) = self.selected {
                    let entry = &self.entries[index];
                    log::debug!(
                        "selected {} at ({:.6}, {:.6})",
                        entry.popup.name,
                        entry.marker.latitude,
                        entry.marker.longitude
                    );

                    // Fetch the popup photo once per URL
                    if let Some(url) = self.entries[index].popup.image_url.clone() {
                        if !self.photos.contains_key(&url) && !self.failed_photos.contains(&url) {
                            return Task::perform(photo::load_photo(url.clone()), move |result| {
                                Message::PhotoLoaded {
                                    url: url.clone(),
                                    result,
                                }
                            });
                        }
                    }
                }

                Task::none()
            }
            Message::SearchChanged(query) => {
                self.search_query = query;
                self.refresh_visible();
                Task::none()
            }
            Message::ClearSearch => {
                self.search_query.clear();
                self.refresh_visible();
                Task::none()
            }
            Message::BaseLayerPicked(layer) => {
                self.base_layer = layer;
                Task::none()
            }
            Message::PhotoLoaded { url, result } => {
                match result {
                    Ok(handle) => {
                        self.photos.insert(url, handle);
                    }
                    Err(e) => {
                        log::warn!("popup photo failed: {e}");
                        self.failed_photos.insert(url);
                    }
                }
                Task::none()
            }
            Message::CopyLink(link) => iced::clipboard::write(link),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let representation =
            filter::representation_for_zoom(self.zoom, self.config.dot_zoom_threshold);

        let tiles = match self.base_layer {
            BaseLayer::Street => &self.street_tiles,
            BaseLayer::Satellite => &self.satellite_tiles,
        };

        let map: Element<Message> = MapView {
            entries: &self.entries,
            visible: &self.visible,
            representation,
            selected: self.selected,
            tiles,
            icons: &self.icons,
            zoom: self.zoom,
            center: self.center,
            bounds: self.config.campus_bounds,
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
            max_native_zoom: self.config.max_native_zoom,
        }
        .into();

        let mut sidebar = column![
            text("Campus Tree Map").size(24),
            button("Open CSV...").on_press(Message::OpenCsv).padding(8),
            row![
                text_input("Search Tree", &self.search_query).on_input(Message::SearchChanged),
                button("Clear").on_press(Message::ClearSearch).padding(6),
            ]
            .spacing(6),
            pick_list(BaseLayer::ALL, Some(self.base_layer), Message::BaseLayerPicked),
            text(format!(
                "{} of {} trees shown",
                self.visible.len(),
                self.entries.len()
            ))
            .size(13),
        ]
        .spacing(12)
        .padding(16)
        .width(300);

        if let Some(entry) = self.selected.and_then(|index| self.entries.get(index)) {
            let photo = entry
                .popup
                .image_url
                .as_ref()
                .and_then(|url| self.photos.get(url));
            sidebar = sidebar.push(popup::popup_card(entry, photo));
        }

        sidebar = sidebar.push(text(&self.status).size(12));

        row![
            scrollable(sidebar).height(Length::Fill),
            container(map).width(Length::Fill).height(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Campus Tree Map", TreeMap::update, TreeMap::view)
        .theme(TreeMap::theme)
        .window_size((1280.0, 800.0))
        .centered()
        .run_with(TreeMap::new)
}
