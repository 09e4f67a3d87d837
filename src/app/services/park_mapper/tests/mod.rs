//! Tests for the park mapping module
//!
//! Scraping and parsing are exercised against inline HTML and CSV
//! fixtures; nothing here goes over the network.


/// Radius search response with one result row
pub const SEARCH_PAGE: &str = concat!(
    r#"<html><body><table><tr><th>Peak</th><th>Elev-Ft</th>"#,
    r#"<th>Prom-Ft</th><th>Radius Search</th></tr><tr><td>"#,
    r#"<a href="peak.aspx?pid=2296">Rose, Mount</a></td>"#,
    r#"<td>10776</td><td>3626</td><td>0.4</td></tr></table></body></html>"#,
);

/// Peak page with the full property table
pub const PEAK_PAGE: &str = concat!(
    r#"<html><body><table>"#,
    r#"<tr><td valign=top>Country</td><td>United States</td></tr>"#,
    r#"<tr><td valign=top>State/Province</td><td>Nevada</td></tr>"#,
    r#"<tr><td valign=top>City/Town</td><td>Reno</td></tr>"#,
    r#"<tr><td valign=top>Ownership</td>"#,
    r#"<td>Land: Humboldt-Toiyabe National Forest (Highest Point)"#,
    r#"<br/>Wilderness/Special Area: Mount Rose Wilderness</td></tr>"#,
    r#"</table></body></html>"#,
);

/// Summit list in the published format: title line, header row, data
pub const SUMMIT_LIST: &str = "\
SOTA Summits List (Date=23/08/2024)
SummitCode,AssociationName,RegionName,SummitName,AltM,AltFt,GridRef1,GridRef2,Longitude,Latitude,Points,BonusPoints,ValidFrom,ValidTo,ActivationCount,ActivationDate,ActivationCall
W7N/WC-001,USA - Nevada,Western Nevada,Mount Rose,3285,10776,,,-119.918,39.343,10,3,01/07/2010,31/12/2099,100,13/08/2024,AJ6X
W6/CT-226,USA - California,Central Coast,Frazier Mountain,2446,8026,,,-118.975,34.772,8,0,01/07/2010,31/12/2099,50,01/06/2024,K6EL
";

/// Park list in the published format
pub const PARK_LIST: &str = "\
reference,name,active,entityId,locationDesc,latitude,longitude,grid
K-4571,Humboldt-Toiyabe National Forest,1,291,US-NV,38.5,-117.0,DM18
K-1184,Mount Rose Wilderness,1,291,US-NV,39.3,-119.9,DM09
K-0059,Lake Tahoe Basin Management Unit National Forest,1,291,US-CA,38.9,-120.0,CM98
";
