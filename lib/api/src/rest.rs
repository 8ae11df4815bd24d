use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use brewrec_core::{
    BeerId, BeerRecord, Error, FilterCondition, FilterPredicate, Recommender,
    DEFAULT_RECOMMENDATIONS,
};
use brewrec_data::{EmbeddingTable, MapBounds};

/// Filter constraints as the UI sends them: one optional field per
/// dropdown plus the ABV slider as a `[min, max]` pair. Absent or empty
/// fields constrain nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    numbers: Vec<BeerId>,
    #[serde(default)]
    sections: Vec<String>,
    #[serde(default)]
    states: Vec<String>,
    #[serde(default)]
    styles: Vec<String>,
    abv: Option<(f32, f32)>,
}

impl FilterRequest {
    fn into_predicate(self) -> FilterPredicate {
        let mut predicate = FilterPredicate::new();
        if !self.numbers.is_empty() {
            predicate.push(FilterCondition::NumberIn(self.numbers));
        }
        if !self.sections.is_empty() {
            predicate.push(FilterCondition::SectionIn(self.sections));
        }
        if !self.states.is_empty() {
            predicate.push(FilterCondition::StateIn(self.states));
        }
        if !self.styles.is_empty() {
            predicate.push(FilterCondition::StyleIn(self.styles));
        }
        if let Some((min, max)) = self.abv {
            predicate.push(FilterCondition::AbvBetween { min, max });
        }
        predicate
    }
}

#[derive(Deserialize)]
struct SimilarParams {
    limit: Option<usize>,
}

#[derive(Serialize)]
struct RecommendationDto {
    beer: BeerRecord,
    score: f32,
}

#[derive(Deserialize)]
struct EvaluateRequest {
    #[serde(default)]
    filter: FilterRequest,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct EvaluateResponse {
    beers: Vec<BeerRecord>,
    recommendations: Vec<RecommendationDto>,
    map_bounds: Option<MapBounds>,
}

#[derive(Serialize)]
struct MapPointDto {
    id: BeerId,
    x: f32,
    y: f32,
    name: String,
    section: String,
    style: String,
    brewery: String,
    abv: f32,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        recommender: Arc<Recommender>,
        embedding: Option<Arc<EmbeddingTable>>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(recommender.clone()))
                .app_data(web::Data::new(embedding.clone()))
                .route("/beers", web::get().to(list_beers))
                .route("/beers/filter", web::post().to(filter_beers))
                .route("/beers/{id}", web::get().to(get_beer))
                .route("/beers/{id}/similar", web::get().to(similar_beers))
                .route("/evaluate", web::post().to(evaluate))
                .route("/map", web::get().to(beer_map))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn list_beers(recommender: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(recommender.catalog().records()))
}

async fn get_beer(
    recommender: web::Data<Arc<Recommender>>,
    path: web::Path<BeerId>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    match recommender.catalog().get(id) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Unknown beer id: {id}")
        }))),
    }
}

async fn filter_beers(
    recommender: web::Data<Arc<Recommender>>,
    req: web::Json<FilterRequest>,
) -> ActixResult<HttpResponse> {
    let predicate = req.into_inner().into_predicate();
    Ok(HttpResponse::Ok().json(recommender.catalog().filter(&predicate)))
}

async fn similar_beers(
    recommender: web::Data<Arc<Recommender>>,
    path: web::Path<BeerId>,
    params: web::Query<SimilarParams>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let limit = params.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);

    match recommender.recommend(id, limit) {
        Ok(recs) => {
            let body: Vec<RecommendationDto> = recs
                .into_iter()
                .map(|(beer, score)| RecommendationDto { beer, score })
                .collect();
            Ok(HttpResponse::Ok().json(body))
        }
        Err(Error::UnknownId(_)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Unknown beer id: {id}")
        }))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

/// The single state transition the UI needs: filter, and when exactly one
/// beer survives, attach its recommendations and a viewport fitted to the
/// surviving beers.
async fn evaluate(
    recommender: web::Data<Arc<Recommender>>,
    embedding: web::Data<Option<Arc<EmbeddingTable>>>,
    req: web::Json<EvaluateRequest>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();
    let limit = req.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);
    let predicate = req.filter.into_predicate();

    match recommender.evaluate(&predicate, limit) {
        Ok(evaluation) => {
            let map_bounds = embedding
                .get_ref()
                .as_ref()
                .and_then(|table| table.bounds(evaluation.matches.iter().map(|r| r.id)));
            let response = EvaluateResponse {
                beers: evaluation.matches,
                recommendations: evaluation
                    .recommendations
                    .into_iter()
                    .map(|(beer, score)| RecommendationDto { beer, score })
                    .collect(),
                map_bounds,
            };
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn beer_map(
    recommender: web::Data<Arc<Recommender>>,
    embedding: web::Data<Option<Arc<EmbeddingTable>>>,
) -> ActixResult<HttpResponse> {
    let Some(table) = embedding.get_ref().as_ref() else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "No embedding loaded"
        })));
    };

    let catalog = recommender.catalog();
    let body: Vec<MapPointDto> = table
        .points()
        .iter()
        .filter_map(|point| {
            catalog.get(point.id).map(|record| MapPointDto {
                id: point.id,
                x: point.x,
                y: point.y,
                name: record.name.clone(),
                section: record.section.clone(),
                style: record.style.clone(),
                brewery: record.brewery.clone(),
                abv: record.abv,
            })
        })
        .collect();
    Ok(HttpResponse::Ok().json(body))
}
