pub mod generate_pixel_buffer;
pub mod render_grid;
