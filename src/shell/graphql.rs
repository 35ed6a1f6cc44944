use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::cart::use_cases::mutate_cart::inbound::graphql::CartMutation;
use crate::modules::cart::use_cases::view_cart::inbound::graphql::CartQuery;
use crate::modules::notifications::use_cases::list_notifications::inbound::graphql::{
    NotificationMutation, NotificationQuery,
};
use crate::modules::orders::use_cases::track_order::inbound::graphql::OrderQuery;
use crate::modules::payments::use_cases::retry_payment::inbound::graphql::{
    PaymentMutation, PaymentQuery,
};
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(CartQuery, PaymentQuery, NotificationQuery, OrderQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CartMutation, PaymentMutation, NotificationMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
