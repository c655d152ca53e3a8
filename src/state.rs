#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FadeState {
    Idle,   // No transition running, or the last one reached full opacity
    Fading, // Opacity is being stepped towards 1.0
}
