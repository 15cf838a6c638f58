/// Straight-alpha RGBA8 canvas.
pub mod canvas;
/// "Over" compositing of cards onto the canvas.
pub mod composite;
