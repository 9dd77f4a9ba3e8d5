use punchcard_codes::ibm029;
use punchcard_core::{RgbImage, VerticalMetrics};
use punchcard_print::{render_card, render_cards, CardArtwork, CardRenderSpec};
use punchcard_reader::{
    CardReader, CardRegion, DecodedCard, NoopObserver, ReaderParams, ScanObserver, SearchStatus,
    BRIGHTNESS_PRACTICAL_MAX, BRIGHTNESS_PRACTICAL_MIN, THRESHOLD_STEP,
};

fn padded(text: &str) -> String {
    format!("{text:<80}")
}

fn read_single(img: &RgbImage, params: ReaderParams) -> punchcard_reader::CardReadResult {
    let reader = CardReader::new(params);
    let mut results = reader.read_image(&img.view());
    assert_eq!(results.len(), 1);
    results.remove(0)
}

#[test]
fn clean_card_reads_back_and_stops_on_second_trial() {
    let img = render_card("ABC", &CardRenderSpec::default()).expect("render");
    let res = read_single(&img, ReaderParams::default());

    assert_eq!(res.text(), padded("ABC"));
    assert_eq!(res.invalid_count(), 0);
    assert_eq!(res.status, SearchStatus::Stable);
    assert_eq!(res.trial_count(), 2);
    assert_eq!(res.threshold, BRIGHTNESS_PRACTICAL_MAX - THRESHOLD_STEP);
    assert_eq!(res.summary_line(), padded("ABC"));
}

#[test]
fn every_character_of_the_code_reads_back() {
    let all: String = ibm029().iter().map(|(ch, _)| ch).filter(|&c| c != ' ').collect();
    assert!(all.chars().count() <= 80);
    let img = render_card(&all, &CardRenderSpec::default()).expect("render");
    let res = read_single(&img, ReaderParams::default());
    assert_eq!(res.text(), padded(&all));
    assert!(res.decoded.is_valid());
}

#[test]
fn narrow_hole_leaves_one_invalid_column_and_exhausts_the_search() {
    let spec = CardRenderSpec::default();
    let mut card = CardArtwork::new(spec);
    card.punch_text("A.C").expect("punch");
    // '.' is 12-3-8; a 4 px wide 3-hole is below the acceptance width, which
    // leaves 12-8, a pattern with no character.
    card.punch_with_width(1, 5, 4).expect("punch");
    let img = card.render().expect("render");

    let res = read_single(&img, ReaderParams::default());
    assert_eq!(res.text(), padded("A@C"));
    assert_eq!(res.invalid_count(), 1);
    assert_eq!(res.status, SearchStatus::Exhausted);
    let schedule_len =
        ((BRIGHTNESS_PRACTICAL_MAX - BRIGHTNESS_PRACTICAL_MIN) / THRESHOLD_STEP + 1) as usize;
    assert_eq!(res.trial_count(), schedule_len);
    assert_eq!(res.threshold, res.trials.last().map(|t| t.threshold).unwrap_or(0));
    assert_eq!(
        res.summary_line(),
        format!("{} ** invalid char count = 1", padded("A@C"))
    );
    assert_eq!(res.decoded.surface[1][5], 0);
    assert_eq!(res.decoded.surface[1][0], 11);
}

#[test]
fn single_pass_is_repeatable() {
    let img = render_card("HELLO", &CardRenderSpec::default()).expect("render");
    let reader = CardReader::new(ReaderParams::default());
    let region = CardRegion::full(img.width, img.height);
    let a = reader.read_pass(&img.view(), &region, 220, &mut NoopObserver);
    let b = reader.read_pass(&img.view(), &region, 220, &mut NoopObserver);
    assert_eq!(a.scan, b.scan);
    assert_eq!(a.decoded, b.decoded);
    assert_eq!(a.decoded.text, padded("HELLO"));
}

#[test]
fn pass_measures_the_drawn_card() {
    let spec = CardRenderSpec::default();
    let img = render_card("", &spec).expect("render");
    let reader = CardReader::new(ReaderParams::default());
    let region = CardRegion::full(img.width, img.height);
    let pass = reader.read_pass(&img.view(), &region, 200, &mut NoopObserver);

    let v = pass.scan.vertical;
    assert_eq!(v.top_border, spec.margin_y as i32);
    assert_eq!(v.card_height(), spec.card_height as i32 - 1);
    assert_eq!(v.metrics, VerticalMetrics::from_card_height(650));
    for row in &pass.scan.rows {
        assert_eq!(row.left_border, spec.margin_x as i32);
        assert_eq!(row.card_width(), spec.card_width as i32 - 1);
        assert_eq!(row.data_left_x, spec.margin_x as i32 + 44);
    }
    assert!(pass.scan.holes.is_empty());
    assert_eq!(pass.decoded.text, padded(""));
}

#[test]
fn stacked_cards_are_read_top_to_bottom() {
    let img = render_cards(&["FIRST", "SECOND", "THIRD"], &CardRenderSpec::default())
        .expect("render");
    let params = ReaderParams {
        cards_per_image: 3,
        ..ReaderParams::default()
    };
    let reader = CardReader::new(params);
    let texts: Vec<String> = reader
        .read_image(&img.view())
        .iter()
        .map(|r| r.text().to_string())
        .collect();
    assert_eq!(texts, vec![padded("FIRST"), padded("SECOND"), padded("THIRD")]);
}

#[test]
fn notch_in_the_side_border_is_ignored() {
    let spec = CardRenderSpec::default();
    let mut img = render_card("X1", &spec).expect("render");
    let (mx, my) = (spec.margin_x as i32, spec.margin_y as i32);
    // Light notch cutting 30 px into the left edge across the probe line of
    // row 5.
    let m = VerticalMetrics::from_card_height(650);
    let y5 = my + m.first_row_offset() + 5 * m.row_height;
    img.fill_rect(mx, y5 - 3, mx + 30, y5 + 4, spec.background);

    let res = read_single(&img, ReaderParams::default());
    assert_eq!(res.text(), padded("X1"));
    assert_eq!(res.status, SearchStatus::Stable);
}

#[test]
fn white_mode_reads_neutral_holes() {
    let img = render_card("WHITE", &CardRenderSpec::default()).expect("render");
    let params = ReaderParams {
        prefer_white: true,
        ..ReaderParams::default()
    };
    let res = read_single(&img, params);
    assert_eq!(res.text(), padded("WHITE"));
    assert_eq!(res.status, SearchStatus::Stable);
}

#[test]
fn white_mode_ignores_tinted_light() {
    // Yellow light passes the channel mean but not every channel.
    let spec = CardRenderSpec {
        background: [255, 255, 120],
        hole: [255, 255, 120],
        ..CardRenderSpec::default()
    };
    let img = render_card("Y", &spec).expect("render");
    // Channel mean of the light is 210.
    let params = ReaderParams {
        brightest: 200,
        ..ReaderParams::default()
    };

    let mean = read_single(&img, params.clone());
    assert_eq!(mean.text(), padded("Y"));

    let white = read_single(
        &img,
        ReaderParams {
            prefer_white: true,
            ..params
        },
    );
    assert_ne!(white.text(), padded("Y"));
}

#[test]
fn inverted_threshold_range_reads_nothing() {
    let img = render_card("ABC", &CardRenderSpec::default()).expect("render");
    let params = ReaderParams {
        brightest: 150,
        dimmest: 250,
        ..ReaderParams::default()
    };
    assert!(params.validate().is_err());
    let res = read_single(&img, params);
    assert_eq!(res.decoded, DecodedCard::unread());
    assert_eq!(res.trial_count(), 0);
    assert_eq!(res.threshold, 150);
    assert_eq!(res.status, SearchStatus::Exhausted);
}

#[derive(Default)]
struct Counting {
    windows: usize,
    passes: Vec<i32>,
    row_borders: usize,
    expected_lines: usize,
    finished: usize,
}

impl ScanObserver for Counting {
    fn search_window(&mut self, _region: &CardRegion) {
        self.windows += 1;
    }

    fn begin_pass(&mut self, threshold: i32) {
        self.passes.push(threshold);
    }

    fn row_borders(&mut self, _region: &CardRegion, _row: &punchcard_reader::RowGeometry) {
        self.row_borders += 1;
    }

    fn expected_holes(
        &mut self,
        _y: i32,
        _row: &punchcard_reader::RowGeometry,
        _vertical: &punchcard_reader::VerticalGeometry,
    ) {
        self.expected_lines += 1;
    }

    fn end_pass(&mut self, _threshold: i32, _decoded: &DecodedCard) {
        self.finished += 1;
    }
}

#[test]
fn observer_sees_every_pass_and_row() {
    let img = render_card("OBS", &CardRenderSpec::default()).expect("render");
    let reader = CardReader::new(ReaderParams::default());
    let mut obs = Counting::default();
    let results = reader.read_image_observed(&img.view(), &mut obs);

    assert_eq!(obs.windows, 1);
    assert_eq!(obs.passes, vec![250, 247]);
    assert_eq!(obs.finished, results[0].trial_count());
    assert_eq!(obs.row_borders, 2 * 12);
    assert_eq!(obs.expected_lines, 2 * 12);
}
