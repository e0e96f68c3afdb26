//! Static provider payloads used across harnesses.
//!
//! Each payload is a small but realistic document in the provider's raw
//! shape. The expected canonical output for each is spelled out in the
//! provider harness.

/// Three zones: a priced zone with an outline, a zone without a parking code
/// (dropped) and a weekend-only zone.
pub const EUROPARK_PAYLOAD: &str = r#"{
    "paringzones": [
        {
            "id": 501,
            "parking_code": "EP12",
            "price_list": [
                { "amount_w_vat": 300, "period": "2 HOURS", "restrictions_text": [], "restrictions": [] },
                {
                    "amount_w_vat": 150,
                    "period": "1 HOUR",
                    "restrictions_text": ["E-R 8-18"],
                    "restrictions": [ { "start_time": "08:00:00", "end_time": "18:00:00", "weekdays": "12345" } ]
                },
                { "amount_w_vat": 5000, "period": "1 MONTH", "restrictions_text": [], "restrictions": [] }
            ],
            "geojson": {
                "features": [
                    { "properties": {}, "geometry": { "type": "Point", "coordinates": [24.75, 59.43] } },
                    {
                        "properties": { "type": "outline" },
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[[24.7, 59.4], [24.8, 59.4], [24.8, 59.5], [24.7, 59.4]]]
                        }
                    }
                ]
            }
        },
        {
            "id": 502,
            "parking_code": "",
            "price_list": [],
            "geojson": { "features": [ { "properties": {}, "geometry": { "type": "Point", "coordinates": [24.1, 59.1] } } ] }
        },
        {
            "id": 503,
            "parking_code": "EP7",
            "price_list": [
                {
                    "amount_w_vat": 100,
                    "period": "30 MINUTES",
                    "restrictions_text": [],
                    "restrictions": [ { "start_time": "10:00:00", "end_time": "16:00:00", "weekdays": "67" } ]
                }
            ],
            "geojson": { "features": [ { "properties": {}, "geometry": { "type": "Point", "coordinates": [26.72, 58.38] } } ] }
        }
    ]
}"#;

/// Five items: a weekday/Saturday zone, a parking machine (skipped), an
/// overnight-only zone, a barrier zone (ignored) and a seasonal zone.
pub const PARKIMINE_PAYLOAD: &str = r#"{
    "items": [
        {
            "id": 21,
            "title": "Kesklinn (K)",
            "opened": "E-R 07:00-19:00, L 08:00-15:00",
            "areas": [ { "points": [ { "lat": 59.43, "lng": 24.75 }, { "lat": 59.44, "lng": 24.76 }, { "lat": 59.43, "lng": 24.75 } ] } ]
        },
        { "id": 22, "title": "Parking machine 4", "opened": "24/7", "areas": [] },
        {
            "id": 23,
            "title": "Old Town P3",
            "opened": "24/7",
            "areas": [ { "points": [ { "lat": 59.1, "lng": 24.1 } ] } ]
        },
        {
            "id": 24,
            "title": "Harbour H",
            "opened": "24/7",
            "areas": [ { "points": [ { "lat": 59.2, "lng": 24.2 } ] } ]
        },
        {
            "id": 25,
            "title": "Beach S",
            "opened": "15. mai - 15. september 10:00-22:00",
            "areas": [ { "points": [ { "lat": 58.3, "lng": 24.5 } ] } ]
        }
    ],
    "details": {
        "21": {
            "label": "Tariff zone K1",
            "rows": [ [], ["15 min", "0.50 €", "Buy"], ["1 hour", "1.80 €", "Buy"] ]
        },
        "23": {
            "rows": [ ["1 hour", "2 &euro;"] ],
            "important_message": "Paid parking 23:00 &#8211; 07:00"
        },
        "24": {
            "rows": [ ["1 hour", "3 €"] ],
            "important_message": "Barriers only open when calling the number on the barrier: +372 5555 5555"
        },
        "25": { "rows": [ ["1 hour", "1 €"] ] }
    }
}"#;

/// Two locations: one with a full detail, one without any detail.
pub const SNABB_PAYLOAD: &str = r#"{
    "locations": [
        {
            "ID": 3301,
            "Name": "B-12 Rotermann",
            "AddressText": "Rotermanni 8",
            "Latitude": 59.44,
            "Longitude": 24.76,
            "Zone": "B",
            "Type": "PARKING",
            "RentView": "HOURLY"
        },
        {
            "ID": 3302,
            "Name": "Ülemiste",
            "AddressText": "Suur-Sõjamäe 4",
            "Latitude": 59.42,
            "Longitude": 24.8,
            "Zone": "B",
            "Type": "PARKING",
            "RentView": "HOURLY",
            "Code": "ULE"
        }
    ],
    "details": {
        "3301": { "HalfHourPrice": 1.2, "Price24h": 10, "FreeMinutes": 15 }
    }
}"#;

/// A parkimine payload whose only zone carries an unreadable price.
pub const PARKIMINE_BAD_PRICE_PAYLOAD: &str = r#"{
    "items": [
        { "id": 31, "title": "Zone Q", "opened": "24/7", "areas": [ { "points": [ { "lat": 59.0, "lng": 24.0 } ] } ] }
    ],
    "details": { "31": { "rows": [ ["1 hour", "ask the attendant"] ] } }
}"#;
