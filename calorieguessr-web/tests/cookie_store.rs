#![cfg(target_arch = "wasm32")]

use calorieguessr_web::game::{CookieScoreStore, DayKey, ScoreRecord, SessionStore};
use chrono::NaiveDate;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn key() -> DayKey {
    DayKey::for_date(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap())
}

#[wasm_bindgen_test]
fn save_then_load_round_trips() {
    let store = CookieScoreStore;
    let mut record = ScoreRecord::fresh(key());
    record.scores.extend([1_000, 500]);

    store.save(&record).expect("save record");
    let loaded = store.load(&key()).expect("load record");
    assert_eq!(loaded, Some(record));

    store.clear_all().expect("clear records");
    assert_eq!(store.load(&key()).expect("load after clear"), None);
}

#[wasm_bindgen_test]
fn absent_day_loads_as_none() {
    let store = CookieScoreStore;
    let other = DayKey::for_date(NaiveDate::from_ymd_opt(1999, 1, 2).unwrap());
    assert_eq!(store.load(&other).expect("load"), None);
}
