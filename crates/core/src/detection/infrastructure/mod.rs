pub mod blob_detector;
pub mod blob_pip_counter;
pub mod contour_die_locator;
pub mod polygon;
pub mod roi;
