use yew::prelude::*;

use crate::components::anchor::AnchorLink;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <nav class="page-toc">
                <AnchorLink href="#story">{"工作室故事"}</AnchorLink>
                <AnchorLink href="#team">{"团队"}</AnchorLink>
            </nav>
            <section id="story">
                <h1>{"关于蜂鸟创新工作室"}</h1>
                <p>{"蜂鸟创新工作室是一支由学生组成的创新团队，专注于软件开发、产品设计与科技竞赛。"}</p>
                <p>{"像蜂鸟一样，我们体量小、反应快，在每一个项目中追求精巧与专注。"}</p>
            </section>
            <section id="team">
                <h2>{"团队"}</h2>
                <p>{"成员来自计算机、设计与电子等专业，按项目灵活组队。"}</p>
            </section>
        </div>
    }
}
