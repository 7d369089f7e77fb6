// ============================================================================
// ROUTE PLAN MODELS - Itinerario de viaje con paradas ordenadas
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Franja horaria de una parada, en orden cronológico
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

/// Parada de un itinerario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub label: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    #[serde(default)]
    pub eco_score: Option<f64>,
}

/// Itinerario completo devuelto por el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub plan_id: String,
    pub waypoints: Vec<Waypoint>,
}

impl RoutePlan {
    /// Ordenar paradas por fecha y luego por franja horaria (orden estable)
    pub fn sort_waypoints(&mut self) {
        self.waypoints.sort_by(|a, b| {
            a.date.cmp(&b.date).then(a.time_slot.cmp(&b.time_slot))
        });
    }
}

/// Parsear un itinerario recibido del backend.
/// Un payload malformado se trata en la frontera: se loguea y la vista
/// correspondiente renderiza un estado vacío en lugar de propagar el error.
pub fn parse_route_plan(json: &str) -> Result<RoutePlan, String> {
    let mut plan = serde_json::from_str::<RoutePlan>(json)
        .map_err(|e| format!("Error parseando itinerario: {}", e))?;
    plan.sort_waypoints();
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(id: &str, date: &str, slot: TimeSlot) -> Waypoint {
        Waypoint {
            id: id.to_string(),
            label: format!("Parada {}", id),
            date: date.parse().unwrap(),
            time_slot: slot,
            eco_score: None,
        }
    }

    #[test]
    fn test_sort_by_date_then_slot() {
        let mut plan = RoutePlan {
            plan_id: "p1".to_string(),
            waypoints: vec![
                wp("c", "2026-08-27", TimeSlot::Morning),
                wp("b", "2026-08-26", TimeSlot::Evening),
                wp("a", "2026-08-26", TimeSlot::Morning),
            ],
        };
        plan.sort_waypoints();
        let order: Vec<&str> = plan.waypoints.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable_within_same_slot() {
        let mut plan = RoutePlan {
            plan_id: "p2".to_string(),
            waypoints: vec![
                wp("first", "2026-08-26", TimeSlot::Afternoon),
                wp("second", "2026-08-26", TimeSlot::Afternoon),
            ],
        };
        plan.sort_waypoints();
        assert_eq!(plan.waypoints[0].id, "first");
        assert_eq!(plan.waypoints[1].id, "second");
    }

    #[test]
    fn test_parse_valid_payload_sorts() {
        let json = r#"{
            "plan_id": "p3",
            "waypoints": [
                {"id": "late", "label": "Museo", "date": "2026-09-02", "time_slot": "evening"},
                {"id": "early", "label": "Parque", "date": "2026-09-01", "time_slot": "morning"}
            ]
        }"#;
        let plan = parse_route_plan(json).unwrap();
        assert_eq!(plan.waypoints[0].id, "early");
        assert_eq!(plan.waypoints[1].id, "late");
    }

    #[test]
    fn test_parse_malformed_payload_is_error() {
        assert!(parse_route_plan("{not json").is_err());
        assert!(parse_route_plan(r#"{"plan_id": "x"}"#).is_err());
    }
}
