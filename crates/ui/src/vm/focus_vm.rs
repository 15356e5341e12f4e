use bloom_core::model::GrowthStage;

/// What the focus screen's buttons ask the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusIntent {
    Start,
    Pause,
    Reset,
}

/// Remaining seconds as the countdown shows them, for example `25:00`.
#[must_use]
pub fn format_countdown(remaining_secs: u32) -> String {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    format!("{minutes}:{seconds:02}")
}

#[must_use]
pub fn stage_label(stage: GrowthStage) -> &'static str {
    match stage {
        GrowthStage::Seed => "Seed",
        GrowthStage::Sprout => "Sprout",
        GrowthStage::Seedling => "Seedling",
        GrowthStage::Budding => "Budding",
        GrowthStage::Bloom => "In bloom",
    }
}

/// The plant illustration for a stage.
#[must_use]
pub fn stage_art(stage: GrowthStage) -> &'static str {
    match stage {
        GrowthStage::Seed => "\u{1f330}",
        GrowthStage::Sprout => "\u{1f331}",
        GrowthStage::Seedling => "\u{1f33f}",
        GrowthStage::Budding => "\u{1fab4}",
        GrowthStage::Bloom => "\u{1f338}",
    }
}
