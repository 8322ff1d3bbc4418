//! SVG renderers for the journey: the scroll-driven globe and the flat map
//! shown when motion is reduced.

use crate::cache;
use crate::config::*;
use sitemariage::events::{events, route_coordinates, EventId};
use sitemariage::geo::{
    densify, graticule, line_path, polygon_path, NaturalEarth, Orthographic, Point, Projection,
};
use sitemariage::i18n::{event_text, t, Language};
use sitemariage::journey::{partial_route, CameraState, MarkerStyle};
use sitemariage::land::land;
use std::rc::Rc;
use yew::prelude::*;

fn activate_on_key(on_select: &Callback<EventId>, id: EventId) -> Callback<KeyboardEvent> {
    let on_select = on_select.clone();
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" || e.key() == " " {
            e.prevent_default();
            on_select.emit(id);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct GlobeProps {
    pub camera: CameraState,
    pub lang: Language,
    pub on_select: Callback<EventId>,
}

/// Orthographic globe for the current camera.
#[function_component(Globe)]
pub fn globe(props: &GlobeProps) -> Html {
    let hovered = use_state_eq(|| None::<EventId>);
    let lines = use_memo((), |_| graticule(GRATICULE_STEP_DEG, GRATICULE_PRECISION_DEG));
    let route = use_memo((), |_| route_coordinates());

    let cam = props.camera;
    let center = Point::new(GLOBE_SIZE / 2.0, GLOBE_SIZE / 2.0);
    let proj = Orthographic::new(cam.center, cam.scale, center);

    let graticule_d: String = lines.iter().map(|l| line_path(&proj, l)).collect();
    let land_paths = match land() {
        Ok(features) => cache::land_paths(features, cam.center, cam.scale, center),
        Err(_) => Rc::new(Vec::new()),
    };
    let route_d = line_path(&proj, &densify(&partial_route(&route, cam.route_progress)));
    let rtl = props.lang.is_rtl();

    let markers = events()
        .iter()
        .filter_map(|event| {
            let p = proj.project(event.coordinates)?;
            let highlighted = cam.highlight == Some(event.id);
            let style = MarkerStyle::for_scale(cam.scale, highlighted);
            let radius = if !highlighted && *hovered == Some(event.id) {
                MarkerStyle::hover_radius(cam.scale)
            } else {
                style.radius
            };
            let (fill, stroke) = if highlighted {
                (MARKER_ACTIVE_FILL, MARKER_ACTIVE_STROKE)
            } else {
                (MARKER_FILL, MARKER_STROKE)
            };
            let name = event_text(event, "name", props.lang);
            let id = event.id;
            let onclick = props.on_select.reform(move |_: MouseEvent| id);
            let onkeydown = activate_on_key(&props.on_select, id);
            let onmouseenter = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
            };
            let onmouseleave = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(None))
            };
            let (label_x, anchor) = if rtl {
                (p.x - style.label_dx, "end")
            } else {
                (p.x + style.label_dx, "start")
            };

            Some(html! {
                <g class={classes!("globe-marker", highlighted.then_some("active"))}
                    role="button"
                    tabindex="0"
                    aria-label={name.clone()}
                    {onclick} {onkeydown} {onmouseenter} {onmouseleave}>
                    <circle cx={format!("{:.1}", p.x)} cy={format!("{:.1}", p.y)}
                        r={format!("{:.1}", radius)}
                        fill={fill} stroke={stroke}
                        stroke-width={style.stroke_width.to_string()} />
                    <text x={format!("{:.1}", label_x)} y={format!("{:.1}", p.y + style.font_size / 3.0)}
                        text-anchor={anchor}
                        font-size={format!("{:.1}", style.font_size)}
                        font-weight={style.font_weight.to_string()}>
                        { name }
                    </text>
                </g>
            })
        })
        .collect::<Html>();

    html! {
        <svg class="globe" viewBox={format!("0 0 {0} {0}", GLOBE_SIZE)}
            role="img" aria-label={t("globe.aria_label", props.lang).to_string()}>
            <circle cx={center.x.to_string()} cy={center.y.to_string()}
                r={format!("{:.1}", cam.scale.min(GLOBE_SIZE))} fill={OCEAN_COLOR} />
            <path d={graticule_d} fill="none" stroke={GRATICULE_STROKE} stroke-width="0.5" />
            { land_paths.iter().map(|d| html! {
                <path d={d.clone()} fill={LAND_COLOR} stroke={LAND_STROKE} stroke-width="0.5"
                    fill-rule="evenodd" />
            }).collect::<Html>() }
            <path class="route" d={route_d} fill="none" stroke={ROUTE_COLOR}
                stroke-width="2.5" stroke-linecap="round" stroke-dasharray="6 4" />
            { markers }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaticMapProps {
    pub lang: Language,
    pub on_select: Callback<EventId>,
}

/// Flat map with the whole route and a button per event.
#[function_component(StaticMap)]
pub fn static_map(props: &StaticMapProps) -> Html {
    let proj = NaturalEarth::new(
        STATIC_MAP_CENTER,
        STATIC_MAP_SCALE,
        Point::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0),
    );
    // The projection is fixed, so the outlines are computed once.
    let land_d = use_memo((), move |_| match land() {
        Ok(features) => features
            .iter()
            .flat_map(|f| f.polygons.iter())
            .map(|rings| polygon_path(&proj, rings))
            .collect::<String>(),
        Err(_) => String::new(),
    });
    let route_d = use_memo((), move |_| line_path(&proj, &densify(&route_coordinates())));

    let buttons = events()
        .iter()
        .map(|event| {
            let p = proj.project_to_limb(event.coordinates);
            let style = format!(
                "left: {:.2}%; top: {:.2}%;",
                p.x / MAP_WIDTH * 100.0,
                p.y / MAP_HEIGHT * 100.0
            );
            let id = event.id;
            let onclick = props.on_select.reform(move |_: MouseEvent| id);
            html! {
                <button type="button" class="map-marker" {style} {onclick}>
                    <span aria-hidden="true">{ event.emoji }</span>
                    <span class="map-marker-label">{ event_text(event, "name", props.lang) }</span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="static-map">
            <svg viewBox={format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)}
                role="img" aria-label={t("globe.static_aria_label", props.lang).to_string()}>
                <rect width={MAP_WIDTH.to_string()} height={MAP_HEIGHT.to_string()} fill={OCEAN_COLOR} />
                <path d={(*land_d).clone()} fill={LAND_COLOR} stroke={LAND_STROKE} fill-rule="evenodd" />
                <path d={(*route_d).clone()} fill="none" stroke={ROUTE_COLOR} stroke-width="2.5"
                    stroke-dasharray="6 4" />
                { events().iter().map(|event| {
                    let p = proj.project_to_limb(event.coordinates);
                    html! {
                        <circle cx={format!("{:.1}", p.x)} cy={format!("{:.1}", p.y)} r="6"
                            fill={MARKER_FILL} stroke={MARKER_STROKE} stroke-width="2" />
                    }
                }).collect::<Html>() }
            </svg>
            { buttons }
        </div>
    }
}
