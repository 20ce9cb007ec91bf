//! Embedded Crop Disease Tables
//!
//! 8 crops, 42 records. Each crop lists its healthy record first, followed by
//! the diseases it is scanned for. Only Black Scurf (tuber) and Root Rot (root)
//! sit below ground; every other record is foliar.

use super::AnatomicalSite::{self, Leaf, Root, Tuber};
use super::VisualPattern::{self, *};
use super::{DiseaseRecord, Progression, Treatment};
use crate::crops::Crop;

/// Static form of a disease record
struct Entry {
    id: &'static str,
    name: &'static str,
    severity: u8,
    site: AnatomicalSite,
    symptoms: &'static [&'static str],
    patterns: &'static [VisualPattern],
    organic: &'static str,
    chemical: &'static str,
    dosage: Option<&'static str>,
    frequency: Option<&'static str>,
    progression: Option<(u32, &'static str)>,
    tips: &'static [&'static str],
}

impl Entry {
    fn to_record(&self) -> DiseaseRecord {
        DiseaseRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            severity: self.severity,
            anatomical_site: self.site,
            symptoms: self.symptoms.iter().map(|s| s.to_string()).collect(),
            visual_patterns: self.patterns.iter().copied().collect(),
            treatment: Treatment {
                organic: self.organic.to_string(),
                chemical: self.chemical.to_string(),
                dosage: self.dosage.map(str::to_string),
                frequency: self.frequency.map(str::to_string),
            },
            progression: self.progression.map(|(days, description)| Progression {
                days,
                description: description.to_string(),
            }),
            prevention_tips: self.tips.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub(super) fn records() -> Vec<(Crop, Vec<DiseaseRecord>)> {
    Crop::ALL
        .into_iter()
        .map(|crop| (crop, entries(crop).iter().map(Entry::to_record).collect()))
        .collect()
}

fn entries(crop: Crop) -> &'static [Entry] {
    match crop {
        Crop::Tomato => TOMATO,
        Crop::Potato => POTATO,
        Crop::Corn => CORN,
        Crop::Apple => APPLE,
        Crop::Grape => GRAPE,
        Crop::Rice => RICE,
        Crop::Wheat => WHEAT,
        Crop::Cotton => COTTON,
    }
}

// ============================================================================
// EMBEDDED DISEASE DATA
// ============================================================================

static TOMATO: &[Entry] = &[
    Entry {
        id: "tomato_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "no spots", "normal growth"],
        patterns: &[],
        organic: "Continue regular care. Ensure proper watering and sunlight.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Regular inspection", "Proper spacing", "Good drainage"],
    },
    Entry {
        id: "tomato_early_blight",
        name: "Early Blight",
        severity: 6,
        site: Leaf,
        symptoms: &["dark spots with concentric rings", "yellowing around spots", "lower leaves affected first"],
        patterns: &[BrownSpots, YellowEdges],
        organic: "Remove infected leaves. Apply neem oil spray. Use copper-based fungicide.",
        chemical: "Apply Mancozeb or Chlorothalonil fungicide.",
        dosage: Some("Mancozeb: 2.5g per liter of water"),
        frequency: Some("Every 7-10 days until symptoms subside"),
        progression: Some((5, "Disease will spread to upper leaves in 3-5 days if untreated")),
        tips: &["Crop rotation", "Avoid overhead watering", "Mulching"],
    },
    Entry {
        id: "tomato_late_blight",
        name: "Late Blight",
        severity: 9,
        site: Leaf,
        symptoms: &["large water-soaked lesions", "white fuzzy growth on underside", "rapid plant death"],
        patterns: &[BrownSpots, WaterSoaked],
        organic: "Remove and destroy infected plants immediately. Apply copper fungicide.",
        chemical: "Apply Metalaxyl + Mancozeb (Ridomil Gold).",
        dosage: Some("Ridomil Gold: 2g per liter of water"),
        frequency: Some("Every 5-7 days, start preventively in humid conditions"),
        progression: Some((3, "URGENT: Can destroy entire crop in 3-4 days. Act immediately!")),
        tips: &["Avoid wet foliage", "Good air circulation", "Resistant varieties"],
    },
    Entry {
        id: "tomato_leaf_mold",
        name: "Leaf Mold",
        severity: 5,
        site: Leaf,
        symptoms: &["yellow patches on upper leaf", "olive-green fuzzy mold underneath", "in greenhouses"],
        patterns: &[YellowEdges, WhiteMold],
        organic: "Improve ventilation. Remove infected leaves. Apply sulfur spray.",
        chemical: "Apply Chlorothalonil or Mancozeb.",
        dosage: Some("Chlorothalonil: 2g per liter of water"),
        frequency: Some("Every 7-14 days"),
        progression: Some((7, "Spreads slowly but reduces yield significantly over 1-2 weeks")),
        tips: &["Reduce humidity", "Space plants properly", "Avoid evening watering"],
    },
    Entry {
        id: "tomato_septoria",
        name: "Septoria Leaf Spot",
        severity: 5,
        site: Leaf,
        symptoms: &["small circular spots with dark borders", "gray centers with tiny black dots", "starts on lower leaves"],
        patterns: &[BrownSpots, BlackSpots],
        organic: "Remove infected leaves. Apply copper fungicide. Mulch around base.",
        chemical: "Apply Mancozeb or Chlorothalonil.",
        dosage: Some("Mancozeb: 2g per liter of water"),
        frequency: Some("Every 7-10 days"),
        progression: Some((10, "Spreads upward through plant over 7-10 days")),
        tips: &["Avoid splashing water", "Remove plant debris", "Crop rotation"],
    },
    Entry {
        id: "tomato_spider_mites",
        name: "Spider Mites",
        severity: 4,
        site: Leaf,
        symptoms: &["tiny yellow/white stippling", "fine webbing on leaves", "dusty appearance"],
        patterns: &[YellowEdges],
        organic: "Spray with strong water jet. Apply neem oil or insecticidal soap.",
        chemical: "Apply Abamectin or Spiromesifen.",
        dosage: Some("Abamectin: 0.5ml per liter of water"),
        frequency: Some("Every 5-7 days, 3 applications"),
        progression: Some((14, "Population doubles every 3-5 days in hot weather")),
        tips: &["Maintain humidity", "Regular inspection", "Avoid dusty conditions"],
    },
    Entry {
        id: "tomato_target_spot",
        name: "Target Spot",
        severity: 5,
        site: Leaf,
        symptoms: &["brown spots with target-like rings", "affects leaves, stems, fruit", "spots may crack"],
        patterns: &[BrownSpots],
        organic: "Remove infected parts. Apply copper-based fungicide.",
        chemical: "Apply Azoxystrobin or Chlorothalonil.",
        dosage: Some("Azoxystrobin: 1ml per liter of water"),
        frequency: Some("Every 7-14 days"),
        progression: Some((7, "Spreads to fruit in 5-7 days, reducing marketability")),
        tips: &["Stake plants", "Improve air flow", "Avoid overhead irrigation"],
    },
    Entry {
        id: "tomato_mosaic_virus",
        name: "Mosaic Virus",
        severity: 7,
        site: Leaf,
        symptoms: &["mottled light/dark green pattern", "distorted leaves", "stunted growth"],
        patterns: &[YellowEdges],
        organic: "No cure. Remove and destroy infected plants. Wash hands after handling.",
        chemical: "No chemical treatment available for viruses.",
        dosage: None,
        frequency: None,
        progression: Some((0, "No cure - remove plant immediately to prevent spread")),
        tips: &["Use resistant varieties", "Control aphids", "Disinfect tools"],
    },
    Entry {
        id: "tomato_yellow_leaf_curl",
        name: "Yellow Leaf Curl Virus",
        severity: 8,
        site: Leaf,
        symptoms: &["upward curling leaves", "yellow leaf margins", "stunted bushy growth"],
        patterns: &[YellowEdges, Wilting],
        organic: "Control whiteflies with yellow sticky traps. Remove infected plants.",
        chemical: "Apply Imidacloprid to control whitefly vectors.",
        dosage: Some("Imidacloprid: 0.5ml per liter of water"),
        frequency: Some("Weekly application to control vectors"),
        progression: Some((0, "No cure - focus on preventing spread via whitefly control")),
        tips: &["Use reflective mulches", "Screen greenhouse vents", "Resistant varieties"],
    },
    Entry {
        id: "tomato_bacterial_spot",
        name: "Bacterial Spot",
        severity: 6,
        site: Leaf,
        symptoms: &["small dark raised spots", "water-soaked appearance", "spots on fruit"],
        patterns: &[BrownSpots, BlackSpots, WaterSoaked],
        organic: "Apply copper hydroxide. Remove infected leaves. Avoid overhead watering.",
        chemical: "Apply Copper + Mancozeb combination.",
        dosage: Some("Copper hydroxide: 2g per liter of water"),
        frequency: Some("Every 5-7 days during wet weather"),
        progression: Some((5, "Spreads rapidly in wet conditions, affects fruit in 4-5 days")),
        tips: &["Use disease-free seeds", "Avoid working with wet plants", "Crop rotation"],
    },
];

static POTATO: &[Entry] = &[
    Entry {
        id: "potato_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "normal growth", "no spots or wilting"],
        patterns: &[],
        organic: "Continue regular care with proper hilling and watering.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Regular hilling", "Proper drainage", "Certified seed potatoes"],
    },
    Entry {
        id: "potato_early_blight",
        name: "Early Blight",
        severity: 6,
        site: Leaf,
        symptoms: &["dark brown spots with rings", "yellowing leaves", "lower leaves first"],
        patterns: &[BrownSpots, YellowEdges],
        organic: "Remove infected foliage. Apply copper fungicide. Mulch heavily.",
        chemical: "Apply Mancozeb or Chlorothalonil.",
        dosage: Some("Mancozeb: 2.5g per liter of water"),
        frequency: Some("Every 7-10 days"),
        progression: Some((7, "Reduces tuber yield by 20-30% if left untreated for a week")),
        tips: &["Crop rotation (3 years)", "Resistant varieties", "Good air circulation"],
    },
    Entry {
        id: "potato_late_blight",
        name: "Late Blight",
        severity: 10,
        site: Leaf,
        symptoms: &["water-soaked lesions", "white mold on leaf undersides", "rapid browning"],
        patterns: &[BrownSpots, WhiteMold, WaterSoaked],
        organic: "URGENT: Remove and destroy all infected plants. Apply copper fungicide preventively.",
        chemical: "Apply Metalaxyl + Mancozeb (Ridomil Gold) immediately.",
        dosage: Some("Ridomil Gold: 2.5g per liter of water"),
        frequency: Some("Every 5 days during outbreak"),
        progression: Some((2, "EMERGENCY: Can destroy entire field in 2-3 days! Act NOW!")),
        tips: &["Weather monitoring", "Preventive sprays in humid weather", "Resistant varieties"],
    },
    Entry {
        id: "potato_black_scurf",
        name: "Black Scurf (Rhizoctonia)",
        severity: 4,
        site: Tuber,
        symptoms: &["black lumps on tuber surface", "cankers on stems", "delayed emergence"],
        patterns: &[BlackSpots],
        organic: "Use certified seed. Warm soil before planting. Add compost.",
        chemical: "Seed treatment with Pencycuron before planting.",
        dosage: Some("Pencycuron: 1.25ml per kg of seed"),
        frequency: Some("One-time seed treatment"),
        progression: Some((30, "Affects tuber quality at harvest, reduces marketability")),
        tips: &["Certified seed", "Crop rotation", "Proper soil temperature"],
    },
];

static CORN: &[Entry] = &[
    Entry {
        id: "corn_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "normal tassel", "good ear development"],
        patterns: &[],
        organic: "Continue regular care with proper fertilization.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Proper spacing", "Adequate nitrogen", "Weed control"],
    },
    Entry {
        id: "corn_gray_leaf_spot",
        name: "Gray Leaf Spot",
        severity: 6,
        site: Leaf,
        symptoms: &["rectangular gray-brown lesions", "lesions follow leaf veins", "lower leaves first"],
        patterns: &[BrownSpots],
        organic: "Crop rotation. Remove crop residue. Improve air flow.",
        chemical: "Apply Azoxystrobin or Pyraclostrobin fungicide.",
        dosage: Some("Azoxystrobin: 1ml per liter of water"),
        frequency: Some("Every 14 days, 2-3 applications"),
        progression: Some((10, "Can reduce yield by 30-50% if infection reaches ear leaves")),
        tips: &["Resistant hybrids", "Tillage to bury residue", "Avoid continuous corn"],
    },
    Entry {
        id: "corn_common_rust",
        name: "Common Rust",
        severity: 5,
        site: Leaf,
        symptoms: &["orange-brown pustules", "pustules on both leaf surfaces", "dusty spores"],
        patterns: &[RustColor],
        organic: "Usually self-limiting. Ensure good nutrition.",
        chemical: "Apply Propiconazole or Tebuconazole if severe.",
        dosage: Some("Propiconazole: 1ml per liter of water"),
        frequency: Some("One application at first sign"),
        progression: Some((14, "Moderate impact, more severe in cool, humid conditions")),
        tips: &["Resistant varieties", "Early planting", "Balanced fertilization"],
    },
    Entry {
        id: "corn_northern_leaf_blight",
        name: "Northern Leaf Blight",
        severity: 7,
        site: Leaf,
        symptoms: &["long cigar-shaped gray-green lesions", "lesions up to 15cm", "starts on lower leaves"],
        patterns: &[BrownSpots],
        organic: "Crop rotation. Incorporate residue. Use resistant hybrids.",
        chemical: "Apply Mancozeb or Propiconazole fungicide.",
        dosage: Some("Mancozeb: 2.5g per liter of water"),
        frequency: Some("Every 10-14 days"),
        progression: Some((7, "Can cause 30-50% yield loss if it reaches ear before grain fill")),
        tips: &["Resistant hybrids", "Crop rotation", "Residue management"],
    },
    Entry {
        id: "corn_southern_leaf_blight",
        name: "Southern Leaf Blight",
        severity: 6,
        site: Leaf,
        symptoms: &["tan elongated lesions", "parallel-sided spots", "affects lower leaves"],
        patterns: &[BrownSpots, YellowEdges],
        organic: "Remove infected leaves. Improve air circulation.",
        chemical: "Apply Chlorothalonil or Mancozeb.",
        dosage: Some("Chlorothalonil: 2g per liter of water"),
        frequency: Some("Every 7-10 days"),
        progression: Some((10, "Moderate yield impact, worse in hot humid weather")),
        tips: &["Resistant varieties", "Balanced nutrition", "Avoid dense planting"],
    },
];

static APPLE: &[Entry] = &[
    Entry {
        id: "apple_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "no spots", "good fruit development"],
        patterns: &[],
        organic: "Continue regular care. Prune for good air flow.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Regular pruning", "Balanced fertilization", "Clean orchard floor"],
    },
    Entry {
        id: "apple_scab",
        name: "Apple Scab",
        severity: 7,
        site: Leaf,
        symptoms: &["olive-brown spots on leaves", "scabby spots on fruit", "premature leaf drop"],
        patterns: &[BrownSpots, BlackSpots],
        organic: "Remove fallen leaves. Apply sulfur or lime-sulfur.",
        chemical: "Apply Captan or Myclobutanil fungicide.",
        dosage: Some("Captan: 2g per liter of water"),
        frequency: Some("Every 7 days during wet spring weather"),
        progression: Some((7, "Spreads rapidly in spring rains, affects fruit marketability")),
        tips: &["Resistant varieties", "Remove fallen leaves", "Prune for air flow"],
    },
    Entry {
        id: "apple_cedar_rust",
        name: "Cedar Apple Rust",
        severity: 5,
        site: Leaf,
        symptoms: &["yellow-orange spots on leaves", "orange spore tubes on underside", "fruit lesions"],
        patterns: &[RustColor, YellowEdges],
        organic: "Remove nearby junipers/cedars. Apply sulfur early season.",
        chemical: "Apply Myclobutanil or Mancozeb.",
        dosage: Some("Myclobutanil: 0.5ml per liter of water"),
        frequency: Some("Every 7-10 days from pink bud to 3 weeks after bloom"),
        progression: Some((14, "Limited spread after initial infection in spring")),
        tips: &["Remove juniper hosts", "Resistant varieties", "Preventive sprays"],
    },
    Entry {
        id: "apple_black_rot",
        name: "Black Rot",
        severity: 6,
        site: Leaf,
        symptoms: &["frogeye leaf spots", "brown to black fruit rot", "limb cankers"],
        patterns: &[BrownSpots, BlackSpots],
        organic: "Prune out cankers. Remove mummified fruit. Apply copper.",
        chemical: "Apply Captan or Thiophanate-methyl.",
        dosage: Some("Captan: 2.5g per liter of water"),
        frequency: Some("Every 10-14 days during growing season"),
        progression: Some((10, "Can cause significant fruit loss if untreated")),
        tips: &["Remove dead wood", "Clean up fallen fruit", "Good sanitation"],
    },
    Entry {
        id: "apple_powdery_mildew",
        name: "Powdery Mildew",
        severity: 5,
        site: Leaf,
        symptoms: &["white powdery coating", "curled leaves", "stunted shoots"],
        patterns: &[WhiteMold],
        organic: "Apply potassium bicarbonate or sulfur.",
        chemical: "Apply Myclobutanil or Trifloxystrobin.",
        dosage: Some("Myclobutanil: 0.5ml per liter of water"),
        frequency: Some("Every 7-10 days from bud break to mid-summer"),
        progression: Some((7, "Reduces fruit size and quality over season")),
        tips: &["Resistant varieties", "Prune for air flow", "Avoid excessive nitrogen"],
    },
];

static GRAPE: &[Entry] = &[
    Entry {
        id: "grape_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "normal cane growth", "good fruit set"],
        patterns: &[],
        organic: "Continue regular care. Train and prune properly.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Proper training", "Balanced fertilization", "Good air flow"],
    },
    Entry {
        id: "grape_black_rot",
        name: "Black Rot",
        severity: 8,
        site: Leaf,
        symptoms: &["brown circular leaf spots", "black shriveled fruit (mummies)", "tan lesions on shoots"],
        patterns: &[BrownSpots, BlackSpots],
        organic: "Remove mummies and infected canes. Apply copper at bud break.",
        chemical: "Apply Mancozeb or Myclobutanil.",
        dosage: Some("Mancozeb: 2.5g per liter of water"),
        frequency: Some("Every 7-10 days from bud break to veraison"),
        progression: Some((7, "Fruit infection is irreversible - act before fruit set")),
        tips: &["Remove mummies", "Prune for air flow", "Canopy management"],
    },
    Entry {
        id: "grape_downy_mildew",
        name: "Downy Mildew",
        severity: 7,
        site: Leaf,
        symptoms: &["yellow oily spots on leaves", "white fuzzy growth underneath", "brown dried tissue"],
        patterns: &[YellowEdges, WhiteMold],
        organic: "Improve air circulation. Apply copper-based fungicide.",
        chemical: "Apply Metalaxyl + Mancozeb or Fosetyl-Al.",
        dosage: Some("Ridomil Gold: 2g per liter of water"),
        frequency: Some("Every 7-10 days during wet weather"),
        progression: Some((5, "Spreads explosively in wet weather - can defoliate vines")),
        tips: &["Good drainage", "Prune suckers", "Preventive sprays in spring"],
    },
    Entry {
        id: "grape_powdery_mildew",
        name: "Powdery Mildew",
        severity: 6,
        site: Leaf,
        symptoms: &["white powdery coating", "distorted growth", "split berries"],
        patterns: &[WhiteMold],
        organic: "Apply sulfur (not on sulfur-sensitive varieties) or potassium bicarbonate.",
        chemical: "Apply Myclobutanil or Trifloxystrobin.",
        dosage: Some("Sulfur: 3g per liter of water"),
        frequency: Some("Every 7-14 days from shoot growth to harvest"),
        progression: Some((7, "Berry infection causes cracking and secondary rots")),
        tips: &["Canopy management", "Leaf removal", "Avoid excessive vigor"],
    },
    Entry {
        id: "grape_leaf_blight",
        name: "Isariopsis Leaf Spot",
        severity: 5,
        site: Leaf,
        symptoms: &["brown spots with yellow halo", "irregular shaped lesions", "premature defoliation"],
        patterns: &[BrownSpots, YellowEdges],
        organic: "Remove infected leaves. Apply neem oil.",
        chemical: "Apply Mancozeb or Copper oxychloride.",
        dosage: Some("Mancozeb: 2g per liter of water"),
        frequency: Some("Every 10-14 days"),
        progression: Some((14, "Can cause early defoliation affecting fruit ripening")),
        tips: &["Remove fallen leaves", "Prune for air flow", "Avoid overhead irrigation"],
    },
];

static RICE: &[Entry] = &[
    Entry {
        id: "rice_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "normal tillering", "good panicle development"],
        patterns: &[],
        organic: "Continue proper water and nutrient management.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Proper water management", "Balanced fertilization", "Good seed selection"],
    },
    Entry {
        id: "rice_blast",
        name: "Rice Blast",
        severity: 9,
        site: Leaf,
        symptoms: &["diamond-shaped lesions", "gray center with brown border", "neck rot at panicle"],
        patterns: &[BrownSpots],
        organic: "Use resistant varieties. Apply Trichoderma as biocontrol.",
        chemical: "Apply Tricyclazole or Isoprothiolane.",
        dosage: Some("Tricyclazole: 0.6g per liter of water"),
        frequency: Some("Every 10-15 days, especially during flowering"),
        progression: Some((5, "Neck blast can cause 100% yield loss in affected panicles")),
        tips: &["Resistant varieties", "Avoid excess nitrogen", "Seed treatment"],
    },
    Entry {
        id: "rice_brown_spot",
        name: "Brown Spot",
        severity: 5,
        site: Leaf,
        symptoms: &["oval brown spots", "dark brown margin", "affects weak plants"],
        patterns: &[BrownSpots],
        organic: "Improve soil fertility. Apply potassium. Use Pseudomonas fluorescens.",
        chemical: "Apply Mancozeb or Propiconazole.",
        dosage: Some("Mancozeb: 2.5g per liter of water"),
        frequency: Some("Every 10-15 days"),
        progression: Some((14, "Reduces grain quality and weight")),
        tips: &["Balanced fertilization", "Good drainage", "Healthy seed"],
    },
    Entry {
        id: "rice_sheath_blight",
        name: "Sheath Blight",
        severity: 7,
        site: Leaf,
        symptoms: &["irregular lesions on sheath", "gray-white with dark border", "spreads upward"],
        patterns: &[BrownSpots, WhiteMold],
        organic: "Reduce plant density. Apply Trichoderma viride.",
        chemical: "Apply Hexaconazole or Validamycin.",
        dosage: Some("Hexaconazole: 2ml per liter of water"),
        frequency: Some("Every 10-15 days during tillering to heading"),
        progression: Some((7, "Can reduce yield by 20-40% if reaches flag leaf")),
        tips: &["Proper spacing", "Avoid excess nitrogen", "Water management"],
    },
];

static WHEAT: &[Entry] = &[
    Entry {
        id: "wheat_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "normal tillering", "good head development"],
        patterns: &[],
        organic: "Continue proper fertilization and irrigation.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Certified seed", "Proper sowing time", "Balanced nutrition"],
    },
    Entry {
        id: "wheat_rust",
        name: "Wheat Rust (Yellow/Brown/Black)",
        severity: 8,
        site: Leaf,
        symptoms: &["orange-brown pustules", "yellow stripes (yellow rust)", "dark pustules (stem rust)"],
        patterns: &[RustColor],
        organic: "Use resistant varieties. Remove volunteer wheat.",
        chemical: "Apply Propiconazole or Tebuconazole.",
        dosage: Some("Propiconazole: 1ml per liter of water"),
        frequency: Some("At first sign, repeat after 15 days if needed"),
        progression: Some((7, "Can cause 30-70% yield loss depending on rust type and timing")),
        tips: &["Resistant varieties", "Early sowing", "Avoid late nitrogen"],
    },
    Entry {
        id: "wheat_powdery_mildew",
        name: "Powdery Mildew",
        severity: 5,
        site: Leaf,
        symptoms: &["white powdery patches", "starts on lower leaves", "gray as it ages"],
        patterns: &[WhiteMold],
        organic: "Good air circulation. Apply potassium silicate.",
        chemical: "Apply Sulfur or Propiconazole.",
        dosage: Some("Sulfur WP: 3g per liter of water"),
        frequency: Some("Every 10-15 days during cool humid weather"),
        progression: Some((10, "Moderate yield impact, worse under irrigation")),
        tips: &["Resistant varieties", "Avoid dense sowing", "Balanced nitrogen"],
    },
    Entry {
        id: "wheat_septoria",
        name: "Septoria Leaf Blotch",
        severity: 6,
        site: Leaf,
        symptoms: &["tan lesions with dark specks", "irregular blotches", "progresses up plant"],
        patterns: &[BrownSpots, BlackSpots],
        organic: "Crop rotation. Remove infected residue.",
        chemical: "Apply Azoxystrobin + Cyproconazole.",
        dosage: Some("Azoxystrobin: 1ml per liter of water"),
        frequency: Some("At flag leaf emergence, repeat if needed"),
        progression: Some((14, "Spreads upward during wet weather, protects flag leaf")),
        tips: &["Crop rotation", "Resistant varieties", "Residue management"],
    },
];

static COTTON: &[Entry] = &[
    Entry {
        id: "cotton_healthy",
        name: "Healthy",
        severity: 0,
        site: Leaf,
        symptoms: &["green leaves", "normal squares and bolls", "good plant structure"],
        patterns: &[],
        organic: "Continue balanced nutrition and pest management.",
        chemical: "No treatment needed.",
        dosage: None,
        frequency: None,
        progression: None,
        tips: &["Proper spacing", "Balanced fertilization", "Integrated pest management"],
    },
    Entry {
        id: "cotton_bacterial_blight",
        name: "Bacterial Blight",
        severity: 7,
        site: Leaf,
        symptoms: &["angular water-soaked spots", "black arm on stems", "boll rot"],
        patterns: &[BrownSpots, BlackSpots, WaterSoaked],
        organic: "Use disease-free seed. Apply copper fungicide.",
        chemical: "Seed treatment with Streptocycline. Apply copper oxychloride.",
        dosage: Some("Streptocycline: 0.5g + Copper: 2.5g per liter"),
        frequency: Some("Every 7-10 days during wet weather"),
        progression: Some((5, "Black arm can cause severe stem damage and plant death")),
        tips: &["Acid-delinted treated seed", "Crop rotation", "Avoid overhead irrigation"],
    },
    Entry {
        id: "cotton_alternaria_leaf_spot",
        name: "Alternaria Leaf Spot",
        severity: 5,
        site: Leaf,
        symptoms: &["circular brown spots", "concentric rings", "premature defoliation"],
        patterns: &[BrownSpots],
        organic: "Remove infected leaves. Apply neem-based products.",
        chemical: "Apply Mancozeb or Propiconazole.",
        dosage: Some("Mancozeb: 2.5g per liter of water"),
        frequency: Some("Every 10-15 days"),
        progression: Some((14, "Heavy defoliation affects boll development")),
        tips: &["Crop rotation", "Adequate potassium", "Avoid water stress"],
    },
    Entry {
        id: "cotton_grey_mildew",
        name: "Grey Mildew",
        severity: 6,
        site: Leaf,
        symptoms: &["angular gray spots", "powdery growth on underside", "yellow upper surface"],
        patterns: &[YellowEdges, WhiteMold],
        organic: "Improve air circulation. Apply sulfur.",
        chemical: "Apply Carbendazim or Thiophanate-methyl.",
        dosage: Some("Carbendazim: 1g per liter of water"),
        frequency: Some("Every 10-15 days"),
        progression: Some((10, "Reduces photosynthesis and boll weight")),
        tips: &["Proper spacing", "Avoid excess nitrogen", "Resistant varieties"],
    },
    Entry {
        id: "cotton_root_rot",
        name: "Root Rot",
        severity: 8,
        site: Root,
        symptoms: &["wilting despite moisture", "yellow leaves", "black rotted roots"],
        patterns: &[Wilting, YellowEdges],
        organic: "Improve drainage. Apply Trichoderma viride to soil.",
        chemical: "Soil drenching with Carbendazim.",
        dosage: Some("Carbendazim: 2g per liter for soil drench"),
        frequency: Some("At planting and repeat after 30 days"),
        progression: Some((10, "Can kill plants rapidly, spread through field")),
        tips: &["Good drainage", "Crop rotation", "Avoid waterlogging"],
    },
];
