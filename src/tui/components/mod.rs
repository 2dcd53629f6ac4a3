//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data, the theme included, as props:
//! - `TitleBar`: Screen name, key hints and the theme toggle
//! - `Loader`: Full-body loading indicator
//! - `Notice`: Full-body error or empty message
//! - `CountryItem`: One two-line row of the country list
//! - `InfoSection`: One label/value row of the detail screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Search field, emits the whole query on every change
//! - `CountryList`: Selectable list, emits `Open` on Enter
//! - `DetailView`: Scrollable flag line and info sections
//!
//! Stateful components keep their state in `TuiState` and are wrapped in a
//! transient struct each frame.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── loader.rs
//! ├── notice.rs
//! ├── search_box.rs
//! ├── country_item.rs
//! ├── country_list.rs
//! ├── detail_view.rs
//! └── info_section.rs
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod country_item;
pub mod country_list;
pub mod detail_view;
pub mod info_section;
pub mod loader;
pub mod notice;
pub mod search_box;

pub use country_item::CountryItem;
pub use country_list::{CountryList, CountryListEvent, CountryListState};
pub use detail_view::{DetailView, DetailViewState};
pub use info_section::InfoSection;
pub use loader::Loader;
pub use notice::{Notice, NoticeKind};
pub use search_box::{SearchBox, SearchEvent};
