//! Integration tests for the AEMET client using wiremock.
//!
//! These drive the real HTTP client against a mock server, covering both
//! phases of the protocol and the transport/decode failure modes.

use mitiempo::{
    AemetClient, ApiKey, ForecastApi, ForecastClientError, ForecastOutcome, ForecastWorkflow,
    MunicipalityCode,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn redirect_body(data_url: &str) -> serde_json::Value {
    serde_json::json!({
        "descripcion": "exito",
        "estado": 200,
        "datos": data_url,
        "metadatos": "https://opendata.aemet.es/opendata/sh/metadatos"
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!([{
        "elaborado": "2026-08-27T09:48:12",
        "id": 28065,
        "nombre": "Getafe",
        "provincia": "Madrid",
        "version": 1.0,
        "origen": {
            "productor": "Agencia Estatal de Meteorología - AEMET",
            "web": "https://www.aemet.es"
        },
        "prediccion": {
            "dia": [{
                "fecha": "2026-08-27T00:00:00",
                "temperatura": {"maxima": 31, "minima": 18},
                "estadoCielo": [
                    {"value": "11", "periodo": "00-24", "descripcion": "Despejado"}
                ],
                "viento": [
                    {"direccion": "SO", "velocidad": 10, "periodo": "00-24"}
                ]
            }]
        }
    }])
}

fn test_client(server: &MockServer) -> AemetClient {
    AemetClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn fetch_redirect_sends_key_header_and_decodes_envelope() {
    let server = MockServer::start().await;
    let data_url = format!("{}/sh/abc123", server.uri());

    Mock::given(method("GET"))
        .and(path("/prediccion/especifica/municipio/diaria/28065"))
        .and(header("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(redirect_body(&data_url)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client
        .fetch_redirect(&MunicipalityCode::from("28065"), &ApiKey::new("test-key"))
        .await
        .expect("redirect call should succeed");

    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.data_url.as_deref(), Some(data_url.as_str()));
}

#[tokio::test]
async fn fetch_redirect_decodes_rejection_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/prediccion/especifica/municipio/diaria/99999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "descripcion": "municipio no encontrado",
            "estado": 404
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelope = client
        .fetch_redirect(&MunicipalityCode::from("99999"), &ApiKey::new("test-key"))
        .await
        .expect("a rejection envelope still decodes");

    assert_eq!(envelope.status, 404);
    assert_eq!(envelope.description, "municipio no encontrado");
    assert!(envelope.data_url.is_none());
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .fetch_redirect(&MunicipalityCode::from("28065"), &ApiKey::new("test-key"))
        .await;

    match result {
        Err(ForecastClientError::HttpStatus { status, .. }) => {
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_maps_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_forecast(&format!("{}/sh/abc123", server.uri())).await;

    assert!(
        matches!(result, Err(ForecastClientError::Decode { .. })),
        "expected Decode, got {result:?}"
    );
}

#[tokio::test]
async fn fetch_forecast_follows_the_opaque_url_as_is() {
    let server = MockServer::start().await;

    // The data URL has no relation to the API base path; the client must use
    // it verbatim.
    Mock::given(method("GET"))
        .and(path("/sh/9f8e7d6c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = AemetClient::builder()
        .base_url("http://127.0.0.1:1".to_string())
        .build()
        .expect("client should build");

    let envelopes = client
        .fetch_forecast(&format!("{}/sh/9f8e7d6c", server.uri()))
        .await
        .expect("forecast call should succeed");

    assert_eq!(envelopes.len(), 1);
    assert_eq!(envelopes[0].name, "Getafe");
    assert_eq!(envelopes[0].prediction.days[0].temperature.max, Some(31));
}

#[tokio::test]
async fn latin1_payload_still_decodes() {
    let server = MockServer::start().await;

    // "Logroño" with an ISO-8859-15 encoded ñ (0xF1); the lossy re-decode
    // must keep the document parseable.
    let mut body = Vec::new();
    body.extend_from_slice(br#"[{"elaborado":"2026-08-27T09:48:12","id":26089,"nombre":"Logro"#);
    body.push(0xF1);
    body.extend_from_slice(br#"o","provincia":"La Rioja","prediccion":{"dia":[]}}]"#);

    Mock::given(method("GET"))
        .and(path("/sh/latin1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let envelopes = client
        .fetch_forecast(&format!("{}/sh/latin1", server.uri()))
        .await
        .expect("lossy decode should keep the JSON parseable");

    assert_eq!(envelopes[0].province, "La Rioja");
    assert!(envelopes[0].name.starts_with("Logro"));
}

// End-to-end run of the two-phase workflow over HTTP. This one pays the real
// mandatory inter-call delay once.
#[tokio::test]
async fn workflow_end_to_end_over_http() {
    let server = MockServer::start().await;
    let data_url = format!("{}/sh/abc123", server.uri());

    Mock::given(method("GET"))
        .and(path("/prediccion/especifica/municipio/diaria/28065"))
        .and(header("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(redirect_body(&data_url)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sh/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = ForecastWorkflow::builder()
        .api(test_client(&server))
        .api_key(ApiKey::new("test-key"))
        .municipality(MunicipalityCode::from("28065"))
        .build();

    struct Quiet;
    impl mitiempo::ForecastPresenter for Quiet {
        fn on_loading(&self) {}
        fn on_success(&self, _report: &mitiempo::ForecastReport) {}
        fn on_error(&self, message: &str) {
            panic!("unexpected error: {message}");
        }
    }

    let outcome = workflow.run(&Quiet).await;
    match outcome {
        ForecastOutcome::Data(report) => {
            assert_eq!(report.max_label, "31°C");
            assert_eq!(report.min_label, "18°C");
            assert_eq!(report.name, "Getafe");
        }
        other => panic!("expected Data, got {other:?}"),
    }
}
