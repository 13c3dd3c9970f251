use serde_json::{json, Value};

use transport_guider::{run, GuiderError, RequestDocument};

fn answer(document: Value) -> Value {
    let document: RequestDocument = serde_json::from_value(document).unwrap();
    let responses = run(document).unwrap();
    serde_json::to_value(responses).unwrap()
}

fn total_time(response: &Value) -> f64 {
    response["total_time"].as_f64().unwrap()
}

#[test]
fn wait_then_ride_one_stop() {
    let responses = answer(json!({
        "routing_settings": {"bus_wait_time": 5, "bus_velocity": 30},
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "R", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Route", "from": "A", "to": "B", "id": 1}
        ]
    }));

    assert_eq!(
        responses,
        json!([{
            "request_id": 1,
            "total_time": 7.0,
            "items": [
                {"type": "Wait", "stop_name": "A", "time": 5.0},
                {"type": "Bus", "bus": "R", "span_count": 1, "time": 2.0}
            ]
        }])
    );
}

#[test]
fn stop_and_bus_lookups() {
    let responses = answer(json!({
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
        "base_requests": [
            {"type": "Bus", "name": "828", "stops": ["A", "B", "C", "A"], "is_roundtrip": true},
            {"type": "Bus", "name": "256", "stops": ["B", "C"], "is_roundtrip": false},
            {"type": "Stop", "name": "A", "latitude": 55.574371, "longitude": 37.6517,
             "road_distances": {"B": 7500, "C": 1800}},
            {"type": "Stop", "name": "B", "latitude": 55.581065, "longitude": 37.64839,
             "road_distances": {"C": 750}},
            {"type": "Stop", "name": "C", "latitude": 55.587655, "longitude": 37.645687,
             "road_distances": {"A": 1800}},
            {"type": "Stop", "name": "Lonely", "latitude": 55.0, "longitude": 37.0}
        ],
        "stat_requests": [
            {"type": "Stop", "name": "B", "id": 1},
            {"type": "Stop", "name": "Lonely", "id": 2},
            {"type": "Stop", "name": "Nowhere", "id": 3},
            {"type": "Bus", "name": "828", "id": 4},
            {"type": "Bus", "name": "256", "id": 5},
            {"type": "Bus", "name": "750", "id": 6}
        ]
    }));

    assert_eq!(responses[0], json!({"request_id": 1, "buses": ["256", "828"]}));
    assert_eq!(responses[1], json!({"request_id": 2, "buses": []}));
    assert_eq!(
        responses[2],
        json!({"request_id": 3, "error_message": "not found"})
    );

    let circular = &responses[3];
    assert_eq!(circular["stop_count"], 4);
    assert_eq!(circular["unique_stop_count"], 3);
    assert_eq!(circular["route_length"].as_f64().unwrap(), 7500.0 + 750.0 + 1800.0);
    assert!(circular["curvature"].as_f64().unwrap() > 1.0);

    let linear = &responses[4];
    assert_eq!(linear["stop_count"], 3);
    assert_eq!(linear["unique_stop_count"], 2);
    assert_eq!(linear["route_length"].as_f64().unwrap(), 1500.0);

    assert_eq!(
        responses[5],
        json!({"request_id": 6, "error_message": "not found"})
    );
}

#[test]
fn asymmetric_distances_give_asymmetric_times() {
    let responses = answer(json!({
        "routing_settings": {"bus_wait_time": 5, "bus_velocity": 30},
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"A": 2000}},
            {"type": "Bus", "name": "R", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Route", "from": "A", "to": "B", "id": 1},
            {"type": "Route", "from": "B", "to": "A", "id": 2}
        ]
    }));

    assert_eq!(total_time(&responses[0]), 7.0);
    assert_eq!(total_time(&responses[1]), 9.0);
}

#[test]
fn transfer_beats_slow_direct_bus() {
    // Bus "slow" drives A - C directly over 9 km; "1" and "2" need a change at B
    let responses = answer(json!({
        "routing_settings": {"bus_wait_time": 2, "bus_velocity": 60},
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000, "C": 9000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"C": 1000}},
            {"type": "Stop", "name": "C", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "slow", "stops": ["A", "C"], "is_roundtrip": false},
            {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false},
            {"type": "Bus", "name": "2", "stops": ["B", "C"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Route", "from": "A", "to": "C", "id": 1}
        ]
    }));

    assert_eq!(
        responses[0],
        json!({
            "request_id": 1,
            "total_time": 6.0,
            "items": [
                {"type": "Wait", "stop_name": "A", "time": 2.0},
                {"type": "Bus", "bus": "1", "span_count": 1, "time": 1.0},
                {"type": "Wait", "stop_name": "B", "time": 2.0},
                {"type": "Bus", "bus": "2", "span_count": 1, "time": 1.0}
            ]
        })
    );
}

#[test]
fn one_bus_covers_several_spans() {
    let responses = answer(json!({
        "routing_settings": {"bus_wait_time": 1, "bus_velocity": 60},
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"C": 2000}},
            {"type": "Stop", "name": "C", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"D": 3000}},
            {"type": "Stop", "name": "D", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "14", "stops": ["A", "B", "C", "D"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Route", "from": "D", "to": "A", "id": 1}
        ]
    }));

    assert_eq!(
        responses[0]["items"],
        json!([
            {"type": "Wait", "stop_name": "D", "time": 1.0},
            {"type": "Bus", "bus": "14", "span_count": 3, "time": 6.0}
        ])
    );
    assert_eq!(total_time(&responses[0]), 7.0);
}

#[test]
fn unreachable_and_unknown_routes_are_not_found() {
    let responses = answer(json!({
        "routing_settings": {"bus_wait_time": 5, "bus_velocity": 30},
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.0},
            {"type": "Stop", "name": "Island", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "R", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Route", "from": "A", "to": "Island", "id": 1},
            {"type": "Route", "from": "A", "to": "Atlantis", "id": 2},
            {"type": "Route", "from": "Island", "to": "Island", "id": 3}
        ]
    }));

    let not_found = |id: i64| json!({"request_id": id, "error_message": "not found"});
    assert_eq!(responses[0], not_found(1));
    assert_eq!(responses[1], not_found(2));
    assert_eq!(
        responses[2],
        json!({"request_id": 3, "total_time": 0.0, "items": []})
    );
}

#[test]
fn missing_road_distance_aborts_the_batch() {
    let document: RequestDocument = serde_json::from_value(json!({
        "routing_settings": {"bus_wait_time": 5, "bus_velocity": 30},
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "R", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Route", "from": "A", "to": "B", "id": 1}
        ]
    }))
    .unwrap();

    assert!(matches!(
        run(document),
        Err(GuiderError::MissingRoadDistance { .. })
    ));
}

#[test]
fn route_request_without_settings_aborts_the_batch() {
    let document: RequestDocument = serde_json::from_value(json!({
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0}
        ],
        "stat_requests": [
            {"type": "Stop", "name": "A", "id": 1},
            {"type": "Route", "from": "A", "to": "A", "id": 2}
        ]
    }))
    .unwrap();

    assert!(matches!(run(document), Err(GuiderError::Configuration(_))));
}

#[test]
fn unclosed_circular_bus_counts_listed_stops() {
    let responses = answer(json!({
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 55.01, "longitude": 37.0,
             "road_distances": {"C": 1000}},
            {"type": "Stop", "name": "C", "latitude": 55.0, "longitude": 37.01,
             "road_distances": {"A": 1000}},
            {"type": "Bus", "name": "ring", "stops": ["A", "B", "C"], "is_roundtrip": true}
        ],
        "stat_requests": [
            {"type": "Bus", "name": "ring", "id": 1}
        ]
    }));

    assert_eq!(responses[0]["stop_count"], 3);
    assert_eq!(responses[0]["unique_stop_count"], 3);
    assert_eq!(responses[0]["route_length"].as_f64().unwrap(), 3000.0);
}

#[test]
fn bus_through_undeclared_stop_is_not_found_and_batch_goes_on() {
    let responses = answer(json!({
        "routing_settings": {"bus_wait_time": 5, "bus_velocity": 30},
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "X", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "R", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Stop", "name": "X", "id": 1},
            {"type": "Route", "from": "A", "to": "B", "id": 2},
            {"type": "Bus", "name": "R", "id": 3},
            {"type": "Stop", "name": "A", "id": 4}
        ]
    }));

    assert_eq!(responses[0], json!({"request_id": 1, "buses": []}));
    assert_eq!(total_time(&responses[1]), 7.0);
    assert_eq!(
        responses[2],
        json!({"request_id": 3, "error_message": "not found"})
    );
    assert_eq!(responses[3], json!({"request_id": 4, "buses": ["R"]}));
}

#[test]
fn coincident_stops_report_null_curvature() {
    let responses = answer(json!({
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "R", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "stat_requests": [
            {"type": "Bus", "name": "R", "id": 1}
        ]
    }));

    assert_eq!(
        responses[0],
        json!({
            "request_id": 1,
            "route_length": 2000.0,
            "curvature": null,
            "stop_count": 3,
            "unique_stop_count": 2
        })
    );
}
