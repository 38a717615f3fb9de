use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FormGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Evenly-spaced grid wrapper for the form's field columns.
pub struct FormGrid;

impl Component for FormGrid {
    type Message = ();
    type Properties = FormGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: 32px;",
            props.columns
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
