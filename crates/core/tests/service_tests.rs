// ═══════════════════════════════════════════════════════════════════
// Service Tests — ValuationService, InventoryService, PriceService,
// HistoryService, ViewService
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;

use metal_worth_core::errors::CoreError;
use metal_worth_core::models::chart::HistorySnapshot;
use metal_worth_core::models::item::{EditRequest, Item};
use metal_worth_core::models::metal::Metal;
use metal_worth_core::models::price::PriceTable;
use metal_worth_core::providers::traits::SpotPriceProvider;
use metal_worth_core::services::history_service::{HistoryService, RESET_HISTORY_PROMPT};
use metal_worth_core::services::inventory_service::InventoryService;
use metal_worth_core::services::price_service::PriceService;
use metal_worth_core::services::valuation_service::ValuationService;
use metal_worth_core::services::view_service::{
    format_amount, format_dollars, format_grams, ViewService,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn prices() -> PriceTable {
    PriceTable {
        gold: 60.0,
        silver: 0.8,
        platinum: 30.0,
        palladium: 35.0,
    }
}

/// Quotes a fixed ounce rate for the metals it supports.
struct FixedRateProvider {
    rate: f64,
    metals: Vec<Metal>,
}

#[async_trait]
impl SpotPriceProvider for FixedRateProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    fn supported_metals(&self) -> Vec<Metal> {
        self.metals.clone()
    }

    async fn get_ounce_rate(&self, _metal: Metal) -> Result<f64, CoreError> {
        Ok(self.rate)
    }
}

struct FailingProvider;

#[async_trait]
impl SpotPriceProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn supported_metals(&self) -> Vec<Metal> {
        Metal::ALL.to_vec()
    }

    async fn get_ounce_rate(&self, _metal: Metal) -> Result<f64, CoreError> {
        Err(CoreError::Api {
            provider: "failing".into(),
            message: "API error".into(),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════
// ValuationService
// ═══════════════════════════════════════════════════════════════════

mod valuation {
    use super::*;

    #[test]
    fn value_is_grams_times_price_times_purity() {
        let svc = ValuationService::new();
        let p = prices();
        for metal in Metal::ALL {
            for karat in 1..=24 {
                for grams in [0.001, 1.0, 7.5, 250.0] {
                    let item = Item::new(metal, karat as f64, grams);
                    let expected = grams * p.get(metal) * (karat as f64 / 24.0);
                    assert!(approx(svc.value_of_item(&item, &p), expected));
                }
            }
        }
    }

    #[test]
    fn pure_gold_example() {
        let svc = ValuationService::new();
        let item = Item::new(Metal::Gold, 24.0, 10.0);
        assert!(approx(svc.value_of_item(&item, &prices()), 600.0));
    }

    #[test]
    fn karat_below_range_clamps_to_one() {
        let svc = ValuationService::new();
        assert!(approx(svc.purity_from_karat(0.0), 1.0 / 24.0));
        assert!(approx(svc.purity_from_karat(-5.0), 1.0 / 24.0));
    }

    #[test]
    fn karat_above_range_clamps_to_pure() {
        let svc = ValuationService::new();
        assert!(approx(svc.purity_from_karat(25.0), 1.0));
        assert!(approx(svc.purity_from_karat(1000.0), 1.0));
    }

    #[test]
    fn non_finite_karat_reads_as_zero_then_clamps() {
        let svc = ValuationService::new();
        assert!(approx(svc.purity_from_karat(f64::NAN), 1.0 / 24.0));
        assert!(approx(svc.purity_from_karat(f64::INFINITY), 1.0 / 24.0));
    }

    #[test]
    fn non_finite_grams_values_at_zero() {
        let svc = ValuationService::new();
        let mut item = Item::new(Metal::Gold, 24.0, 1.0);
        item.grams = f64::NAN;
        assert_eq!(svc.value_of_item(&item, &prices()), 0.0);
    }

    #[test]
    fn non_finite_price_values_at_zero() {
        let svc = ValuationService::new();
        let mut p = prices();
        p.gold = f64::NAN;
        let item = Item::new(Metal::Gold, 24.0, 1.0);
        assert_eq!(svc.value_of_item(&item, &p), 0.0);
    }

    #[test]
    fn total_of_empty_is_zero() {
        assert_eq!(ValuationService::new().total_value(&[], &prices()), 0.0);
    }

    #[test]
    fn total_is_sum_of_items() {
        let svc = ValuationService::new();
        let p = prices();
        let items = vec![
            Item::new(Metal::Gold, 18.0, 10.0),
            Item::new(Metal::Silver, 24.0, 100.0),
            Item::new(Metal::Platinum, 12.0, 2.0),
        ];
        let expected: f64 = items.iter().map(|i| svc.value_of_item(i, &p)).sum();
        assert!(approx(svc.total_value(&items, &p), expected));
        assert!(approx(expected, 450.0 + 80.0 + 30.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
// InventoryService
// ═══════════════════════════════════════════════════════════════════

mod inventory {
    use super::*;

    #[test]
    fn add_accepts_bounds() {
        let svc = InventoryService::new();
        let mut items = Vec::new();
        svc.add_item(&mut items, Metal::Gold, 1.0, 0.01).unwrap();
        svc.add_item(&mut items, Metal::Gold, 24.0, 5.0).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].karat, 24.0);
    }

    #[test]
    fn add_rejects_bad_karat() {
        let svc = InventoryService::new();
        let mut items = Vec::new();
        for karat in [0.0, 0.99, 24.01, 25.0, f64::NAN, f64::INFINITY] {
            let err = svc.add_item(&mut items, Metal::Gold, karat, 1.0).unwrap_err();
            assert!(matches!(err, CoreError::InvalidKarat(_)));
        }
        assert!(items.is_empty());
    }

    #[test]
    fn add_rejects_bad_grams() {
        let svc = InventoryService::new();
        let mut items = Vec::new();
        for grams in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
            let err = svc.add_item(&mut items, Metal::Silver, 12.0, grams).unwrap_err();
            assert!(matches!(err, CoreError::InvalidGrams(_)));
        }
        assert!(items.is_empty());
    }

    #[test]
    fn karat_is_checked_before_grams() {
        let svc = InventoryService::new();
        let mut items = Vec::new();
        let err = svc.add_item(&mut items, Metal::Gold, 30.0, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidKarat(_)));
    }

    #[test]
    fn add_returns_id_of_new_item() {
        let svc = InventoryService::new();
        let mut items = Vec::new();
        let id = svc.add_item(&mut items, Metal::Gold, 18.0, 3.0).unwrap();
        assert_eq!(svc.position_of(&items, id), Some(0));
    }

    #[test]
    fn remove_shifts_later_items() {
        let svc = InventoryService::new();
        let mut items = vec![
            Item::new(Metal::Gold, 18.0, 1.0),
            Item::new(Metal::Silver, 24.0, 2.0),
            Item::new(Metal::Platinum, 20.0, 3.0),
        ];
        let third = items[2].id;
        let removed = svc.remove_item(&mut items, 1).unwrap();
        assert_eq!(removed.metal, Metal::Silver);
        assert_eq!(items.len(), 2);
        assert_eq!(svc.position_of(&items, third), Some(1));
        assert_eq!(svc.position_of(&items, removed.id), None);
    }

    #[test]
    fn remove_out_of_range() {
        let svc = InventoryService::new();
        let mut items = vec![Item::new(Metal::Gold, 18.0, 1.0)];
        assert!(matches!(
            svc.remove_item(&mut items, 1),
            Err(CoreError::ItemNotFound(1))
        ));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn edit_replaces_fields_and_keeps_id() {
        let svc = InventoryService::new();
        let mut items = vec![Item::new(Metal::Gold, 18.0, 1.0)];
        let id = items[0].id;
        let req = EditRequest::new().metal("platinum").karat(22.0).grams(4.5);
        svc.edit_item(&mut items, 0, &req).unwrap();
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].metal, Metal::Platinum);
        assert_eq!(items[0].karat, 22.0);
        assert_eq!(items[0].grams, 4.5);
    }

    #[test]
    fn edit_empty_request_keeps_current_values() {
        let svc = InventoryService::new();
        let mut items = vec![Item::new(Metal::Silver, 10.0, 7.0)];
        let before = items[0].clone();
        svc.edit_item(&mut items, 0, &EditRequest::new()).unwrap();
        assert_eq!(items[0], before);
    }

    #[test]
    fn edit_rejects_as_a_unit() {
        let svc = InventoryService::new();
        let mut items = vec![Item::new(Metal::Gold, 18.0, 1.0)];
        let before = serde_json::to_string(&items).unwrap();

        let bad_requests = [
            EditRequest::new().metal("Copper").karat(20.0).grams(2.0),
            EditRequest::new().metal("Silver").karat(0.0).grams(2.0),
            EditRequest::new().metal("Silver").karat(20.0).grams(0.0),
            EditRequest::new().karat(f64::NAN),
        ];
        for req in &bad_requests {
            let err = svc.edit_item(&mut items, 0, req).unwrap_err();
            assert!(matches!(err, CoreError::InvalidEdit));
        }
        assert_eq!(serde_json::to_string(&items).unwrap(), before);
    }

    #[test]
    fn edit_out_of_range() {
        let svc = InventoryService::new();
        let mut items: Vec<Item> = Vec::new();
        assert!(matches!(
            svc.edit_item(&mut items, 0, &EditRequest::new()),
            Err(CoreError::ItemNotFound(0))
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// PriceService
// ═══════════════════════════════════════════════════════════════════

mod price_service {
    use super::*;

    #[test]
    fn manual_price_updates_one_metal() {
        let svc = PriceService::new(None);
        let mut p = prices();
        svc.set_manual_price(&mut p, Metal::Silver, 1.25).unwrap();
        assert_eq!(p.silver, 1.25);
        assert_eq!(p.gold, 60.0);
    }

    #[test]
    fn manual_non_finite_price_becomes_zero() {
        let svc = PriceService::new(None);
        let mut p = prices();
        let stored = svc.set_manual_price(&mut p, Metal::Gold, f64::NAN).unwrap();
        assert_eq!(stored, 0.0);
        assert_eq!(p.gold, 0.0);
    }

    #[test]
    fn manual_negative_price_rejected() {
        let svc = PriceService::new(None);
        let mut p = prices();
        let err = svc.set_manual_price(&mut p, Metal::Gold, -1.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { .. }));
        assert_eq!(p, prices());
    }

    #[tokio::test]
    async fn fetch_without_provider() {
        let svc = PriceService::new(None);
        assert!(!svc.has_provider());
        assert!(matches!(
            svc.fetch_price_per_gram(Metal::Gold).await,
            Err(CoreError::NoProvider)
        ));
    }

    #[tokio::test]
    async fn fetch_converts_ounce_to_gram() {
        let svc = PriceService::new(Some(Box::new(FixedRateProvider {
            rate: 3100.0,
            metals: vec![Metal::Gold],
        })));
        assert_eq!(svc.provider_name(), Some("fixed"));
        let per_gram = svc.fetch_price_per_gram(Metal::Gold).await.unwrap();
        assert!((per_gram - 99.667).abs() < 1e-3);
    }

    #[tokio::test]
    async fn fetch_unsupported_metal() {
        let svc = PriceService::new(Some(Box::new(FixedRateProvider {
            rate: 3100.0,
            metals: vec![Metal::Gold],
        })));
        assert!(matches!(
            svc.fetch_price_per_gram(Metal::Silver).await,
            Err(CoreError::RateNotAvailable { .. })
        ));
    }

    #[tokio::test]
    async fn fetch_rejects_implausible_rates() {
        for rate in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let svc = PriceService::new(Some(Box::new(FixedRateProvider {
                rate,
                metals: vec![Metal::Gold],
            })));
            assert!(matches!(
                svc.fetch_price_per_gram(Metal::Gold).await,
                Err(CoreError::Api { .. })
            ));
        }
    }

    #[tokio::test]
    async fn fetch_propagates_provider_error() {
        let svc = PriceService::new(Some(Box::new(FailingProvider)));
        let err = svc.fetch_price_per_gram(Metal::Gold).await.unwrap_err();
        assert_eq!(err.to_string(), "API error (failing): API error");
    }
}

// ═══════════════════════════════════════════════════════════════════
// HistoryService
// ═══════════════════════════════════════════════════════════════════

mod history_service {
    use super::*;

    #[test]
    fn snapshot_appends() {
        let svc = HistoryService::new();
        let mut history = Vec::new();
        let a = svc.snapshot(&mut history, "t1", 10.0);
        svc.snapshot(&mut history, "t2", 20.0);
        assert_eq!(a, HistorySnapshot::new("t1", 10.0));
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].value, 20.0);
    }

    #[test]
    fn reset_empty_never_prompts() {
        let svc = HistoryService::new();
        let mut history = Vec::new();
        let mut asked = false;
        let cleared = svc.reset(&mut history, |_| {
            asked = true;
            true
        });
        assert!(!cleared);
        assert!(!asked);
    }

    #[test]
    fn reset_declined_keeps_history() {
        let svc = HistoryService::new();
        let mut history = vec![HistorySnapshot::new("t", 1.0)];
        assert!(!svc.reset(&mut history, |_| false));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn reset_confirmed_clears() {
        let svc = HistoryService::new();
        let mut history = vec![HistorySnapshot::new("t", 1.0), HistorySnapshot::new("u", 2.0)];
        let mut prompt = String::new();
        let cleared = svc.reset(&mut history, |msg| {
            prompt = msg.to_string();
            true
        });
        assert!(cleared);
        assert!(history.is_empty());
        assert_eq!(prompt, RESET_HISTORY_PROMPT);
    }

    #[test]
    fn chart_series_mirrors_history() {
        let svc = HistoryService::new();
        let history = vec![HistorySnapshot::new("t", 1.0)];
        let series = svc.chart_series(&history);
        assert_eq!(series.labels, vec!["t"]);
        assert_eq!(series.data, vec![1.0]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// ViewService
// ═══════════════════════════════════════════════════════════════════

mod view {
    use super::*;

    #[test]
    fn formatting_helpers() {
        assert_eq!(format_grams(12.5), "12.500");
        assert_eq!(format_grams(0.0004), "0.000");
        assert_eq!(format_amount(600.0), "600.00");
        assert_eq!(format_amount(1.005_1), "1.01");
        assert_eq!(format_dollars(600.0), "$600.00");
    }

    #[test]
    fn empty_inventory_renders_zero_total() {
        let model = ViewService::new().render(&[], &prices());
        assert!(model.rows.is_empty());
        assert_eq!(model.total, 0.0);
        assert_eq!(model.total_display, "0.00");
    }

    #[test]
    fn rows_in_inventory_order() {
        let items = vec![
            Item::new(Metal::Gold, 24.0, 10.0),
            Item::new(Metal::Silver, 24.0, 3.25),
        ];
        let model = ViewService::new().render(&items, &prices());
        assert_eq!(model.rows.len(), 2);

        let first = &model.rows[0];
        assert_eq!(first.position, 0);
        assert_eq!(first.metal, Metal::Gold);
        assert_eq!(first.grams_display, "10.000");
        assert_eq!(first.value_display, "$600.00");

        let second = &model.rows[1];
        assert_eq!(second.position, 1);
        assert_eq!(second.grams_display, "3.250");
        assert_eq!(second.value_display, "$2.60");

        assert_eq!(model.total_display, "602.60");
    }

    #[test]
    fn total_follows_current_prices() {
        let items = vec![Item::new(Metal::Gold, 12.0, 2.0)];
        let view = ViewService::new();
        let mut p = prices();
        assert_eq!(view.render(&items, &p).total_display, "60.00");
        p.gold = 120.0;
        assert_eq!(view.render(&items, &p).total_display, "120.00");
    }
}
