/// Chart description, built from the aligned tables before anything is drawn.
///
/// * `layout` – 9×2 grid and the three panel rectangles
/// * `panels` – bars, titles and axis ranges of each panel
/// * `figure` – the composed figure with title and caption
pub mod figure;
pub mod layout;
pub mod panels;
