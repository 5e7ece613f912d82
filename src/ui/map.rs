//! Slippy-map widget
//!
//! Renders an OSM/Esri tile basemap with the tree layer on top and owns
//! the view interactions: cursor-anchored wheel zoom, drag panning with
//! campus-bounds clamping, and marker click hit-testing. Tiles are
//! fetched on background threads into an LRU cache backed by a disk
//! cache under the user cache directory.

use crate::config::Bounds;
use crate::state::category::Category;
use crate::state::entry::{MarkerKind, TreeEntry};
use crate::state::filter::{self, Representation};
use crate::Message;

use cgmath::Vector2;
use iced::advanced::{self, layout, renderer, widget, Layout, Widget};
use iced::widget::image;
use iced::{event, mouse, Border, Color, Element, Event, Length, Radians, Rectangle};
use lru::LruCache;

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// --- Slippy Map / Mercator Math ---
pub const TILE_SIZE: f64 = 256.0;

pub fn lon_to_x(lon: f64, zoom: f64) -> f64 {
    ((lon + 180.0) / 360.0) * 2.0f64.powf(zoom) * TILE_SIZE
}

pub fn lat_to_y(lat: f64, zoom: f64) -> f64 {
    let lat_rad = lat.to_radians();
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0
        * 2.0f64.powf(zoom)
        * TILE_SIZE
}

pub fn x_to_lon(x: f64, zoom: f64) -> f64 {
    (x / (TILE_SIZE * 2.0f64.powf(zoom))) * 360.0 - 180.0
}

pub fn y_to_lat(y: f64, zoom: f64) -> f64 {
    let n = std::f64::consts::PI - 2.0 * std::f64::consts::PI * y / (TILE_SIZE * 2.0f64.powf(zoom));
    (0.5 * (n.exp() - (-n).exp())).atan().to_degrees()
}

/// Campus bounds as zoom-0 world pixels: (left, top, right, bottom).
fn bounds_world(bounds: &Bounds) -> (f64, f64, f64, f64) {
    (
        lon_to_x(bounds.min_lon, 0.0),
        lat_to_y(bounds.max_lat, 0.0),
        lon_to_x(bounds.max_lon, 0.0),
        lat_to_y(bounds.min_lat, 0.0),
    )
}

fn clamp_camera(camera: Vector2<f64>, zoom: f64, viewport: (f64, f64), bounds: &Bounds) -> Vector2<f64> {
    let scale = 2.0f64.powf(zoom);
    let (left, top, right, bottom) = bounds_world(bounds);
    let half_w = viewport.0 / 2.0 / scale;
    let half_h = viewport.1 / 2.0 / scale;

    // Viewport wider than the campus: pin to the middle
    let x = if half_w * 2.0 >= right - left {
        (left + right) / 2.0
    } else {
        camera.x.clamp(left + half_w, right - half_w)
    };
    let y = if half_h * 2.0 >= bottom - top {
        (top + bottom) / 2.0
    } else {
        camera.y.clamp(top + half_h, bottom - half_h)
    };

    Vector2::new(x, y)
}

/// Clamp a (lat, lon) view center so the viewport stays inside the
/// campus bounds.
pub fn clamp_center(center: (f64, f64), zoom: f64, viewport: (f64, f64), bounds: &Bounds) -> (f64, f64) {
    let camera = Vector2::new(lon_to_x(center.1, 0.0), lat_to_y(center.0, 0.0));
    let clamped = clamp_camera(camera, zoom, viewport, bounds);
    (y_to_lat(clamped.y, 0.0), x_to_lon(clamped.x, 0.0))
}

// --- Tile Management ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoords {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl TileCoords {
    /// Fill a tile URL template. Handles both {z}/{x}/{y} (OSM) and
    /// {z}/{y}/{x} (Esri) orderings.
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// Shared tile store for one tile source: memory LRU in front of a disk
/// cache, filled by detached fetch threads.
pub struct TileManager {
    name: String,
    template: String,
    tiles: Arc<Mutex<LruCache<TileCoords, image::Handle>>>,
    pending: Arc<Mutex<HashSet<TileCoords>>>,
}

impl TileManager {
    pub fn new(name: &str, template: String) -> Self {
        Self {
            name: name.to_string(),
            template,
            tiles: Arc::new(Mutex::new(LruCache::new(NonZeroUsize::new(300).unwrap()))),
            pending: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn get_tile(&self, coords: TileCoords) -> Option<image::Handle> {
        let mut tiles = self.tiles.lock().unwrap();
        tiles.get(&coords).cloned()
    }

    /// Path of the on-disk copy of a tile
    ///
    /// - Linux: ~/.cache/campus-tree-map/tiles/<source>/z/x/y.png
    fn cache_path(&self, coords: TileCoords) -> PathBuf {
        let base = dirs::cache_dir()
            .map(|dir| dir.join("campus-tree-map"))
            .unwrap_or_else(|| PathBuf::from(".campus-tree-map"));
        base.join("tiles")
            .join(&self.name)
            .join(coords.z.to_string())
            .join(coords.x.to_string())
            .join(format!("{}.png", coords.y))
    }

    pub fn request_tile(&self, coords: TileCoords) {
        {
            let mut pending = self.pending.lock().unwrap();
            if pending.contains(&coords) {
                return;
            }
            let tiles = self.tiles.lock().unwrap();
            if tiles.contains(&coords) {
                return;
            }
            pending.insert(coords);
        }

        let tiles_arc = Arc::clone(&self.tiles);
        let pending_arc = Arc::clone(&self.pending);
        let cache_path = self.cache_path(coords);
        let url = coords.url(&self.template);

        std::thread::spawn(move || {
            // 1. Check the disk cache first
            if cache_path.exists() {
                if let Ok(bytes) = std::fs::read(&cache_path) {
                    let handle = image::Handle::from_bytes(bytes);
                    tiles_arc.lock().unwrap().put(coords, handle);
                    pending_arc.lock().unwrap().remove(&coords);
                    return;
                }
            }

            // 2. Fetch from the network
            let response = ureq::get(&url)
                .set("User-Agent", "campus-tree-map/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .call();

            match response {
                Ok(response) => {
                    let mut bytes = Vec::new();
                    if std::io::Read::read_to_end(&mut response.into_reader(), &mut bytes).is_ok() {
                        let handle = image::Handle::from_bytes(bytes.clone());
                        tiles_arc.lock().unwrap().put(coords, handle);

                        // 3. Save to the disk cache
                        if let Some(parent) = cache_path.parent() {
                            let _ = std::fs::create_dir_all(parent);
                        }
                        let _ = std::fs::write(&cache_path, bytes);
                    }
                }
                Err(e) => {
                    log::warn!("failed to fetch tile {coords:?}: {e}");
                }
            }
            pending_arc.lock().unwrap().remove(&coords);
        });
    }
}

// --- Marker Icons ---

/// Optional per-category icon images; categories without an image file
/// render as colored shapes instead.
pub struct IconSet {
    handles: HashMap<Category, image::Handle>,
}

impl IconSet {
    pub fn load(dir: &Path) -> Self {
        let mut handles = HashMap::new();
        for category in Category::ALL {
            let path = dir.join(format!("{}.png", category.label()));
            if path.exists() {
                handles.insert(category, image::Handle::from_path(path));
            }
        }
        if handles.is_empty() {
            log::info!("no marker icons under {}; using shape markers", dir.display());
        }
        Self { handles }
    }

    pub fn get(&self, category: Category) -> Option<&image::Handle> {
        self.handles.get(&category)
    }
}

// --- Marker styling ---
const DOT_SIZE: f32 = 7.0;
const ICON_SIZE: f32 = 32.0;
const SHAPE_ICON_SIZE: f32 = 13.0;
const HIT_RADIUS: f32 = 14.0;
const CLICK_SLOP: f32 = 5.0;

fn dot_fill() -> Color {
    Color::from_rgb8(0x4c, 0xaf, 0x50)
}

fn dot_stroke() -> Color {
    Color::from_rgb8(0x0a, 0x7d, 0x00)
}

// --- The Widget ---

pub struct MapView<'a> {
    pub entries: &'a [TreeEntry],
    /// Indices into `entries` that are members of the tree layer
    pub visible: &'a [usize],
    pub representation: Representation,
    pub selected: Option<usize>,
    pub tiles: &'a TileManager,
    pub icons: &'a IconSet,
    pub zoom: f64,
    pub center: (f64, f64), // (lat, lon)
    pub bounds: Bounds,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_native_zoom: u32,
}

impl<'a> MapView<'a> {
    /// Screen anchor of a marker: dots sit on the point, icons hang
    /// above it like a pin.
    fn anchor(kind: MarkerKind, sx: f32, sy: f32, has_icon: bool) -> (f32, f32) {
        match kind {
            MarkerKind::Dot => (sx, sy),
            MarkerKind::Icon if has_icon => (sx, sy - ICON_SIZE / 2.0),
            MarkerKind::Icon => (sx, sy),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct MapState {
    is_dragging: bool,
    press_position: Option<iced::Point>,
    last_cursor: Option<iced::Point>,
    // Track values between prop updates to handle multiple events per frame
    current_center: (f64, f64),
    current_zoom: f64,
    last_prop_center: Option<(f64, f64)>,
    last_prop_zoom: Option<f64>,
}

impl<'a, Theme, Renderer> Widget<Message, Theme, Renderer> for MapView<'a>
where
    Renderer: renderer::Renderer + advanced::image::Renderer<Handle = image::Handle>,
{
    fn size(&self) -> iced::Size<Length> {
        iced::Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<MapState>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(MapState::default())
    }

    fn layout(
        &self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<MapState>();
        let bounds = layout.bounds();

        // Prefer internal state for zero-latency feedback during interactions
        let zoom = if state.last_prop_zoom.is_some() {
            state.current_zoom
        } else {
            self.zoom
        };
        let (center_lat, center_lon) = if state.last_prop_center.is_some() {
            state.current_center
        } else {
            self.center
        };

        let zoom_scale = 2.0f64.powf(zoom);

        let camera_x = lon_to_x(center_lon, 0.0);
        let camera_y = lat_to_y(center_lat, 0.0);

        let half_w = (bounds.width as f64 / 2.0) / zoom_scale;
        let half_h = (bounds.height as f64 / 2.0) / zoom_scale;

        let view_left = camera_x - half_w;
        let view_right = camera_x + half_w;
        let view_top = camera_y - half_h;
        let view_bottom = camera_y + half_h;

        let center_offset_x = (bounds.x + bounds.width / 2.0) as f64 - camera_x * zoom_scale;
        let center_offset_y = (bounds.y + bounds.height / 2.0) as f64 - camera_y * zoom_scale;

        renderer.with_layer(bounds, |renderer| {
            // Background fill
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: Border::default(),
                    ..Default::default()
                },
                Color::from_rgb(0.12, 0.12, 0.12),
            );

            // --- Tile Layer ---
            // Tiles above the native level are upscaled from it
            let z = (zoom.floor().max(0.0) as u32).min(self.max_native_zoom);
            let num_tiles = 2u32.pow(z);
            let tile_size_z0 = TILE_SIZE / 2.0f64.powf(z as f64);

            let min_tx = (view_left / tile_size_z0).floor() as i64;
            let max_tx = (view_right / tile_size_z0).ceil() as i64;
            let min_ty = (view_top / tile_size_z0).floor() as i64;
            let max_ty = (view_bottom / tile_size_z0).ceil() as i64;

            for tx in min_tx..=max_tx {
                if tx < 0 || tx >= num_tiles as i64 {
                    continue;
                }
                for ty in min_ty..=max_ty {
                    if ty < 0 || ty >= num_tiles as i64 {
                        continue;
                    }

                    let coords = TileCoords {
                        x: tx as u32,
                        y: ty as u32,
                        z,
                    };
                    let tile_world_x = tx as f64 * tile_size_z0;
                    let tile_world_y = ty as f64 * tile_size_z0;

                    let screen_x = (center_offset_x + tile_world_x * zoom_scale) as f32;
                    let screen_y = (center_offset_y + tile_world_y * zoom_scale) as f32;
                    let current_tile_size = (tile_size_z0 * zoom_scale) as f32;

                    let tile_rect = Rectangle {
                        x: screen_x,
                        y: screen_y,
                        width: current_tile_size,
                        height: current_tile_size,
                    };

                    if let Some(handle) = self.tiles.get_tile(coords) {
                        renderer.draw_image(
                            advanced::image::Image {
                                handle,
                                filter_method: image::FilterMethod::Linear,
                                rotation: Radians(0.0),
                                opacity: 1.0,
                                snap: false,
                            },
                            tile_rect,
                        );
                    } else {
                        renderer.fill_quad(
                            renderer::Quad {
                                bounds: tile_rect,
                                ..Default::default()
                            },
                            Color::from_rgb(0.16, 0.16, 0.16),
                        );
                        self.tiles.request_tile(coords);
                    }
                }
            }
        });

        // --- Tree Layer ---
        // Drawn in a separate layer on top to ensure visibility
        renderer.with_layer(bounds, |renderer| {
            // Cull with a margin so pins near the edge keep their heads
            let margin = (ICON_SIZE as f64 * 2.0) / zoom_scale;

            for &index in self.visible {
                let entry = &self.entries[index];
                let marker = filter::marker_for(entry, self.representation);

                if marker.world.x < view_left - margin
                    || marker.world.x > view_right + margin
                    || marker.world.y < view_top - margin
                    || marker.world.y > view_bottom + margin
                {
                    continue;
                }

                let sx = (center_offset_x + marker.world.x * zoom_scale) as f32;
                let sy = (center_offset_y + marker.world.y * zoom_scale) as f32;
                let is_selected = self.selected == Some(index);

                match marker.kind {
                    MarkerKind::Dot => {
                        renderer.fill_quad(
                            renderer::Quad {
                                bounds: Rectangle {
                                    x: sx - DOT_SIZE / 2.0,
                                    y: sy - DOT_SIZE / 2.0,
                                    width: DOT_SIZE,
                                    height: DOT_SIZE,
                                },
                                border: Border {
                                    color: dot_stroke(),
                                    width: 1.0,
                                    radius: (DOT_SIZE / 2.0).into(),
                                },
                                ..Default::default()
                            },
                            dot_fill(),
                        );
                    }
                    MarkerKind::Icon => {
                        if let Some(handle) = self.icons.get(marker.category) {
                            renderer.draw_image(
                                advanced::image::Image {
                                    handle: handle.clone(),
                                    filter_method: image::FilterMethod::Linear,
                                    rotation: Radians(0.0),
                                    opacity: 1.0,
                                    snap: false,
                                },
                                Rectangle {
                                    x: sx - ICON_SIZE / 2.0,
                                    y: sy - ICON_SIZE,
                                    width: ICON_SIZE,
                                    height: ICON_SIZE,
                                },
                            );
                        } else {
                            renderer.fill_quad(
                                renderer::Quad {
                                    bounds: Rectangle {
                                        x: sx - SHAPE_ICON_SIZE / 2.0,
                                        y: sy - SHAPE_ICON_SIZE / 2.0,
                                        width: SHAPE_ICON_SIZE,
                                        height: SHAPE_ICON_SIZE,
                                    },
                                    border: Border {
                                        color: Color::BLACK,
                                        width: 1.0,
                                        radius: (SHAPE_ICON_SIZE / 4.0).into(),
                                    },
                                    ..Default::default()
                                },
                                marker.category.color(),
                            );
                        }
                    }
                }

                if is_selected {
                    let has_icon = self.icons.get(marker.category).is_some();
                    let (ax, ay) = Self::anchor(marker.kind, sx, sy, has_icon);
                    let ring = HIT_RADIUS + 4.0;
                    renderer.fill_quad(
                        renderer::Quad {
                            bounds: Rectangle {
                                x: ax - ring,
                                y: ay - ring,
                                width: ring * 2.0,
                                height: ring * 2.0,
                            },
                            border: Border {
                                color: Color::from_rgb(1.0, 1.0, 0.0),
                                width: 2.0,
                                radius: ring.into(),
                            },
                            ..Default::default()
                        },
                        Color::TRANSPARENT,
                    );
                }
            }
        });
    }

    fn on_event(
        &mut self,
        tree: &mut widget::Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn advanced::Clipboard,
        shell: &mut advanced::Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<MapState>();
        let bounds = layout.bounds();
        let viewport = (bounds.width as f64, bounds.height as f64);

        // Initialize or sync internal state from props if they changed externally
        if state.last_prop_center != Some(self.center) || state.last_prop_zoom != Some(self.zoom) {
            state.current_center = self.center;
            state.current_zoom = self.zoom;
            state.last_prop_center = Some(self.center);
            state.last_prop_zoom = Some(self.zoom);
        }

        let current_zoom = state.current_zoom;
        let (center_lat, center_lon) = state.current_center;

        let camera = Vector2::new(lon_to_x(center_lon, 0.0), lat_to_y(center_lat, 0.0));
        let scale = 2.0f64.powf(current_zoom);

        let cursor_point = cursor.position_in(bounds);

        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if let Some(p) = cursor_point {
                    let d = match delta {
                        mouse::ScrollDelta::Lines { y, .. } => y as f64,
                        mouse::ScrollDelta::Pixels { y, .. } => (y as f64) / 100.0,
                    };
                    let new_zoom = (current_zoom + d * 0.2).clamp(self.min_zoom, self.max_zoom);

                    if (new_zoom - current_zoom).abs() > 0.001 {
                        let new_scale = 2.0f64.powf(new_zoom);

                        // Keep the world point under the cursor fixed
                        let mx = (p.x as f64) - (bounds.width as f64 / 2.0);
                        let my = (p.y as f64) - (bounds.height as f64 / 2.0);
                        let shifted = Vector2::new(
                            camera.x + mx / scale - mx / new_scale,
                            camera.y + my / scale - my / new_scale,
                        );

                        let clamped = clamp_camera(shifted, new_zoom, viewport, &self.bounds);
                        let new_center = (y_to_lat(clamped.y, 0.0), x_to_lon(clamped.x, 0.0));

                        // Update internal state immediately for the next event this frame
                        state.current_center = new_center;
                        state.current_zoom = new_zoom;

                        shell.publish(Message::MapMoved {
                            center: new_center,
                            zoom: new_zoom,
                        });
                        return event::Status::Captured;
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    if let Some(position) = cursor.position() {
                        state.is_dragging = true;
                        state.press_position = Some(position);
                        state.last_cursor = Some(position);
                        return event::Status::Captured;
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let was_dragging = state.is_dragging;
                let press_pos = state.press_position;
                let release_pos = cursor.position();

                state.is_dragging = false;
                state.press_position = None;
                state.last_cursor = None;

                if was_dragging {
                    // A press-release with minimal movement is a click
                    if let (Some(p1), Some(p2)) = (press_pos, release_pos) {
                        let moved = (p1.x - p2.x).hypot(p1.y - p2.y);
                        if moved < CLICK_SLOP {
                            let center_offset_x =
                                (bounds.x + bounds.width / 2.0) as f64 - camera.x * scale;
                            let center_offset_y =
                                (bounds.y + bounds.height / 2.0) as f64 - camera.y * scale;

                            // Topmost marker wins
                            for &index in self.visible.iter().rev() {
                                let entry = &self.entries[index];
                                let marker = filter::marker_for(entry, self.representation);
                                let sx = (center_offset_x + marker.world.x * scale) as f32;
                                let sy = (center_offset_y + marker.world.y * scale) as f32;
                                let has_icon = self.icons.get(marker.category).is_some();
                                let (ax, ay) = Self::anchor(marker.kind, sx, sy, has_icon);

                                if (p2.x - ax).hypot(p2.y - ay) <= HIT_RADIUS {
                                    shell.publish(Message::TreeSelected(Some(index)));
                                    return event::Status::Captured;
                                }
                            }

                            // Clicked empty map: clear the popup
                            shell.publish(Message::TreeSelected(None));
                        }
                    }
                    return event::Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if state.is_dragging {
                    if let Some(last_pos) = state.last_cursor {
                        let delta = position - last_pos;
                        state.last_cursor = Some(position);

                        let shifted = Vector2::new(
                            camera.x - delta.x as f64 / scale,
                            camera.y - delta.y as f64 / scale,
                        );

                        // maxBounds viscosity: the drag simply stops at the fence
                        let clamped = clamp_camera(shifted, current_zoom, viewport, &self.bounds);
                        let new_center = (y_to_lat(clamped.y, 0.0), x_to_lon(clamped.x, 0.0));

                        state.current_center = new_center;

                        shell.publish(Message::MapMoved {
                            center: new_center,
                            zoom: current_zoom,
                        });
                        return event::Status::Captured;
                    }
                }
            }
            _ => {}
        }

        event::Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Theme, Renderer> From<MapView<'a>> for Element<'a, Message, Theme, Renderer>
where
    Theme: 'a,
    Renderer: 'a + renderer::Renderer + advanced::image::Renderer<Handle = image::Handle>,
{
    fn from(map_view: MapView<'a>) -> Self {
        Self::new(map_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_mercator_world_center() {
        assert_eq!(lon_to_x(0.0, 0.0), 128.0);
        assert!((lat_to_y(0.0, 0.0) - 128.0).abs() < 1e-9);
        assert_eq!(x_to_lon(192.0, 0.0), 90.0);
    }

    #[test]
    fn test_mercator_inverts_campus_coordinates() {
        let lat = 13.0461;
        let lon = 80.2533;
        assert!((x_to_lon(lon_to_x(lon, 0.0), 0.0) - lon).abs() < 1e-9);
        assert!((y_to_lat(lat_to_y(lat, 0.0), 0.0) - lat).abs() < 1e-9);
    }

    #[test]
    fn test_tile_url_orderings() {
        let coords = TileCoords { x: 1, y: 2, z: 3 };
        assert_eq!(
            coords.url("https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
            "https://tile.openstreetmap.org/3/1/2.png"
        );
        assert_eq!(coords.url("https://example.com/{z}/{y}/{x}"), "https://example.com/3/2/1");
    }

    #[test]
    fn test_clamp_center_keeps_viewport_inside_bounds() {
        let bounds = AppConfig::default().campus_bounds;
        // A center well outside the campus gets pulled back in
        let (lat, lon) = clamp_center((14.0, 81.0), 22.0, (400.0, 300.0), &bounds);
        assert!(bounds.contains(lat, lon));

        // A viewport larger than the campus pins to its middle
        let (lat, lon) = clamp_center((13.0461, 80.2533), 18.0, (1280.0, 800.0), &bounds);
        let (mid_lat, mid_lon) = bounds.center();
        assert!((lat - mid_lat).abs() < 1e-6);
        assert!((lon - mid_lon).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_center_leaves_interior_center_alone() {
        let bounds = AppConfig::default().campus_bounds;
        // Tiny viewport at deep zoom: an interior center is not moved
        let center = bounds.center();
        let (lat, lon) = clamp_center(center, 23.0, (100.0, 100.0), &bounds);
        assert!((lat - center.0).abs() < 1e-9);
        assert!((lon - center.1).abs() < 1e-9);
    }
}
