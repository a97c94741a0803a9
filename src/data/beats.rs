//! ECG beat segmentation and class-based subsampling.
//!
//! Beats are cut from multi-lead recordings around annotated R-peaks. Each
//! beat keeps one window per lead, so a beat can be turned into a vector
//! visibility graph with the leads as co-indexed series.

use super::SampleMatrix;
use crate::dataset::GraphDataset;
use crate::error::{Error, Result};
use crate::graph::VisibilityGraphBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Heartbeat class (AAMI grouping)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BeatClass {
    /// Normal and bundle branch block beats
    Normal,
    /// Supraventricular ectopic beats
    Supraventricular,
    /// Ventricular ectopic beats
    Ventricular,
}

impl BeatClass {
    /// All classes in label order
    pub const ALL: [BeatClass; 3] = [
        BeatClass::Normal,
        BeatClass::Supraventricular,
        BeatClass::Ventricular,
    ];

    /// Classes that dominate typical recordings and are usually subsampled
    pub const MAJORITY: [BeatClass; 2] = [BeatClass::Normal, BeatClass::Ventricular];

    /// Map an annotation symbol to its class.
    ///
    /// Returns `None` for symbols that carry no class (fusion, paced,
    /// unclassifiable, noise, ...).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' | 'L' | 'R' | 'e' | 'j' => Some(BeatClass::Normal),
            'A' | 'a' | 'J' | 'S' => Some(BeatClass::Supraventricular),
            'V' | 'E' => Some(BeatClass::Ventricular),
            _ => None,
        }
    }

    /// Integer label used in graph datasets
    pub fn label(&self) -> usize {
        match self {
            BeatClass::Normal => 0,
            BeatClass::Supraventricular => 1,
            BeatClass::Ventricular => 2,
        }
    }

    /// Short class symbol
    pub fn symbol(&self) -> char {
        match self {
            BeatClass::Normal => 'N',
            BeatClass::Supraventricular => 'S',
            BeatClass::Ventricular => 'V',
        }
    }
}

/// One segmented heartbeat
#[derive(Debug, Clone, PartialEq)]
pub struct Beat {
    /// Sample index of the annotated R-peak
    pub peak: usize,
    /// Beat class
    pub class: BeatClass,
    /// Window of each lead around the peak
    pub leads: Vec<Vec<f64>>,
}

impl Beat {
    /// Number of samples in the beat window
    pub fn len(&self) -> usize {
        self.leads.first().map(|l| l.len()).unwrap_or(0)
    }

    /// Whether the window is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stack the leads into vector samples
    pub fn to_samples(&self) -> Result<SampleMatrix> {
        SampleMatrix::from_series(&self.leads)
    }
}

/// Beats grouped by class, each group in annotation order
#[derive(Debug, Clone, Default)]
pub struct BeatSet {
    beats: BTreeMap<BeatClass, Vec<Beat>>,
}

impl BeatSet {
    /// Create an empty beat set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a beat to its class group
    pub fn push(&mut self, beat: Beat) {
        self.beats.entry(beat.class).or_default().push(beat);
    }

    /// Beats of one class
    pub fn get(&self, class: BeatClass) -> &[Beat] {
        self.beats.get(&class).map(|b| b.as_slice()).unwrap_or(&[])
    }

    /// Total number of beats
    pub fn len(&self) -> usize {
        self.beats.values().map(|b| b.len()).sum()
    }

    /// Whether no beat was kept
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of beats per class
    pub fn counts(&self) -> BTreeMap<BeatClass, usize> {
        self.beats.iter().map(|(c, b)| (*c, b.len())).collect()
    }

    /// Iterate over all beats in class order
    pub fn iter(&self) -> impl Iterator<Item = &Beat> {
        self.beats.values().flatten()
    }

    /// Keep only every `every`-th beat (1-based) of the given classes
    pub fn subsample(&mut self, every: usize, classes: &[BeatClass]) -> Result<()> {
        if every == 0 {
            return Err(Error::InvalidInput(
                "subsampling step must be at least 1".to_string(),
            ));
        }

        for class in classes {
            if let Some(beats) = self.beats.get_mut(class) {
                let before = beats.len();
                let kept: Vec<Beat> = beats
                    .drain(..)
                    .enumerate()
                    .filter(|(i, _)| (i + 1) % every == 0)
                    .map(|(_, beat)| beat)
                    .collect();
                *beats = kept;
                debug!(class = ?class, before, after = beats.len(), "subsampled beats");
            }
        }

        Ok(())
    }

    /// Build one visibility graph per beat and collect them into a labeled dataset
    pub fn to_dataset(&self, builder: &VisibilityGraphBuilder) -> Result<GraphDataset> {
        let mut dataset = GraphDataset::new();

        for beat in self.iter() {
            let samples = beat.to_samples()?;
            let graph = builder.build(&samples)?;
            dataset.push(beat.class.label(), &graph);
        }

        info!(
            graphs = dataset.len(),
            edges = dataset.edges().len(),
            "converted beats into graphs"
        );

        Ok(dataset)
    }
}

/// Cut beats of `before + after` samples around each annotated peak.
///
/// `leads` are the recorded signals (equal length). `annotations` pairs a
/// peak position with its annotation symbol. Peaks whose window does not fit
/// inside the recording, and symbols without a class, are skipped.
pub fn segment_beats(
    leads: &[&[f64]],
    annotations: &[(usize, char)],
    before: usize,
    after: usize,
) -> Result<BeatSet> {
    let signal_len = match leads.first() {
        Some(lead) => lead.len(),
        None => return Err(Error::InvalidInput("no leads supplied".to_string())),
    };
    if leads.iter().any(|l| l.len() != signal_len) {
        return Err(Error::InvalidInput(
            "all leads must have the same length".to_string(),
        ));
    }
    if before + after == 0 {
        return Err(Error::InvalidInput("beat window is empty".to_string()));
    }

    let mut set = BeatSet::new();
    let mut skipped = 0usize;

    for &(peak, symbol) in annotations {
        if peak < before || peak + after > signal_len {
            warn!(peak, %symbol, "skipping beat: window falls outside the recording");
            skipped += 1;
            continue;
        }

        let class = match BeatClass::from_symbol(symbol) {
            Some(class) => class,
            None => {
                warn!(peak, %symbol, "skipping beat: symbol has no class");
                skipped += 1;
                continue;
            }
        };

        let window = (peak - before)..(peak + after);
        set.push(Beat {
            peak,
            class,
            leads: leads.iter().map(|l| l[window.clone()].to_vec()).collect(),
        });
    }

    debug!(kept = set.len(), skipped, "segmented beats");

    Ok(set)
}
