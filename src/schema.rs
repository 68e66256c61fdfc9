use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Json, Object, Result, Schema, SelectionField, ID,
};

use crate::graphql_fields::RequestedFields;
use crate::models::{Bug, PagingInput, SearchCriteria};
use crate::resolvers::BugResolvers;

pub type BugzillaSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single bug by id. Null when the lookup fails; the reason is in `errors`.
    async fn bug(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Bug>> {
        let resolvers = ctx.data::<BugResolvers>()?;
        let requested = requested_fields(ctx.field());

        Ok(Some(resolvers.bug(&id, &requested).await?))
    }

    /// One page of bugs matching `search`
    async fn bugs(
        &self,
        ctx: &Context<'_>,
        search: Option<Json<SearchCriteria>>,
        paging: Option<PagingInput>,
    ) -> Result<Vec<Bug>> {
        let resolvers = ctx.data::<BugResolvers>()?;
        let requested = requested_fields(ctx.field());

        Ok(resolvers
            .bugs(search.as_deref(), paging.as_ref(), &requested)
            .await?)
    }
}

pub fn build_schema(resolvers: BugResolvers) -> BugzillaSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(resolvers)
        .finish()
}

/// Flattens the selection under `field` into dotted leaf paths.
pub fn requested_fields(field: SelectionField<'_>) -> RequestedFields {
    let mut fields = RequestedFields::new();
    collect_paths(field, "", &mut fields);
    fields
}

fn collect_paths(field: SelectionField<'_>, prefix: &str, out: &mut RequestedFields) {
    for child in field.selection_set() {
        let path = if prefix.is_empty() {
            child.name().to_string()
        } else {
            format!("{}.{}", prefix, child.name())
        };

        if child.selection_set().next().is_some() {
            collect_paths(child, &path, out);
        } else {
            out.push(path);
        }
    }
}
