//! HTML output for a built club map.
//!
//! The page is a single file: Leaflet and Leaflet.markercluster come from CDN,
//! and the map model is embedded as JSON in a non-executing script element.

use std::fs;
use std::path::Path;
use tracing::info;

use super::builder::{escape_html, ClubMap, RenderError};

const PAGE_TITLE: &str = "Club Map";

impl ClubMap {
    /// Render the map as a self-contained HTML page.
    pub fn render(&self) -> Result<String, RenderError> {
        Ok(render_page(PAGE_TITLE, &embed_json(self)?))
    }

    /// Render and write the page to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| RenderError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let html = self.render()?;
        fs::write(path, &html).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), bytes = html.len(), "saved club map");
        Ok(())
    }
}

/// JSON safe to place between `<script>` tags: no `<`, `>` or `&` survive,
/// so text like `</script>` inside a club name cannot end the element.
fn embed_json(map: &ClubMap) -> Result<String, RenderError> {
    let json = serde_json::to_string(map)?;
    Ok(json
        .replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e"))
}

fn render_page(title: &str, map_json: &str) -> String {
    PAGE_TEMPLATE
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{MAP_DATA}}", map_json)
}

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"></script>

  <!-- Leaflet.markercluster 1.4.1 -->
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.4.1/dist/MarkerCluster.css" />
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.4.1/dist/MarkerCluster.Default.css" />
  <script src="https://unpkg.com/leaflet.markercluster@1.4.1/dist/leaflet.markercluster.js"></script>

  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
    .legend {
      background: rgba(255, 255, 255, 0.9);
      padding: 6px 10px;
      border-radius: 4px;
      font-family: Arial, sans-serif;
      font-size: 12px;
      box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3);
    }
    .legend-bar { width: 220px; height: 12px; margin: 4px 0; border: 1px solid #999; }
    .legend-range { display: flex; justify-content: space-between; }
  </style>
</head>

<body>
  <div id="map"></div>

  <script type="application/json" id="club-map-data">{{MAP_DATA}}</script>

  <script>
    (function () {
      const data = JSON.parse(document.getElementById('club-map-data').textContent);

      const map = L.map('map', { center: data.center, zoom: data.zoom_start });
      L.tileLayer(data.tiles, { attribution: data.attribution, maxZoom: 19 }).addTo(map);

      const overlays = {};
      for (const layer of data.layers) {
        const group = L.featureGroup();
        const cluster = L.markerClusterGroup();

        for (const m of layer.markers) {
          L.circleMarker([m.lat, m.lon], {
            radius: m.radius,
            color: m.color,
            fill: true,
            fillColor: m.color,
            fillOpacity: m.fill_opacity,
            weight: m.weight
          })
            .bindPopup(m.popup, { maxWidth: data.popup_max_width })
            .bindTooltip(m.tooltip)
            .addTo(cluster);
        }

        cluster.addTo(group);
        if (layer.show) {
          group.addTo(map);
        }
        overlays[layer.name] = group;
      }

      L.control.layers(null, overlays, { collapsed: data.collapsed_control }).addTo(map);

      const legend = L.control({ position: 'topright' });
      legend.onAdd = function () {
        const div = L.DomUtil.create('div', 'legend');
        const caption = L.DomUtil.create('div', 'legend-caption', div);
        caption.textContent = data.legend.caption;
        const bar = L.DomUtil.create('div', 'legend-bar', div);
        bar.style.background = data.legend.gradient;
        const range = L.DomUtil.create('div', 'legend-range', div);
        const lo = L.DomUtil.create('span', '', range);
        lo.textContent = String(data.legend.vmin);
        const hi = L.DomUtil.create('span', '', range);
        hi.textContent = String(data.legend.vmax);
        return div;
      };
      legend.addTo(map);
    })();
  </script>
</body>

</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapSettings;
    use crate::data::{club, ClubTable};
    use crate::map::build_map;

    fn sample_map() -> ClubMap {
        let mut a = club("Na Piarsaigh", "Munster", "Senior", 52.68, -8.63);
        a.performance = Some(55.0);
        let b = club("Clann Éireann", "Ulster", "Senior", 54.45, -6.39);
        build_map(&ClubTable::new(vec![a, b], 0), &MapSettings::default()).expect("build")
    }

    #[test]
    fn test_render_embeds_layers_and_libraries() {
        let html = sample_map().render().expect("render");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("leaflet.js"));
        assert!(html.contains("leaflet.markercluster.js"));
        assert!(html.contains("\"name\":\"Munster  Senior\""));
        assert!(html.contains("\"name\":\"All clubs\""));
        assert!(html.contains("Clann Éireann"));
        assert!(html.contains("Performance (higher = better)"));
        assert!(!html.contains("{{MAP_DATA}}"));
    }

    #[test]
    fn test_hostile_names_cannot_close_script() {
        let evil = club("</script><script>alert(1)</script>", "X", "Y", 53.0, -7.0);
        let map = build_map(&ClubTable::new(vec![evil], 0), &MapSettings::default())
            .expect("build");
        let html = map.render().expect("render");

        // only the template's own script elements close
        assert_eq!(html.matches("</script>").count(), 4);
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_embedded_json_round_trips() {
        let map = sample_map();
        let json = embed_json(&map).expect("json");
        assert!(!json.contains('<'));
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["zoom_start"], 7);
        assert_eq!(value["layers"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("clubmap_html_{}", std::process::id()));
        let path = dir.join("outputs").join("maps").join("clubs.html");

        sample_map().save(&path).expect("save");
        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.contains("club-map-data"));

        fs::remove_dir_all(dir).ok();
    }
}
