// DOM contract between the page markup and the motion front-end.

// Cursor
pub const CURSOR_DOT_ID: &str = "cursor-dot"; // small filled circle
pub const CURSOR_RING_ID: &str = "cursor-ring"; // large outline circle
pub const HOVER_TARGET_SELECTOR: &str = ".cursor-hover-target";

// Logo viewer
pub const LOGO_ID: &str = "logo-3d"; // container rotated with a CSS 3D transform

// Magnetic buttons
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_BG_SELECTOR: &str = "[data-magnetic-bg]"; // fill child inside a button

// Loading screen
pub const LOADER_ID: &str = "loading-screen";
pub const LOADER_PERCENT_ID: &str = "loading-percent";
pub const LOADER_BAR_ID: &str = "loading-bar";
pub const LOADER_DONE_CLASS: &str = "loaded"; // CSS runs the slide-up exit

// Device gating: no custom cursor on touch-first or narrow screens
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Style output precision
pub const PX_DECIMALS: usize = 2;
pub const RAD_DECIMALS: usize = 4;
pub const DEG_DECIMALS: usize = 3;
pub const UNIT_DECIMALS: usize = 3; // opacity and scale
